//! JSON-RPC stdio server around one DRC review session.
//!
//! One request per line on stdin, one response per line on stdout. The
//! board collaborators are the in-crate reference implementations, seeded
//! through the SeedBoard method.

use anyhow::Result;
use clap::Parser;
use drc_review::session::handlers::{
    handle_activate, handle_append_group, handle_append_violation, handle_get_row,
    handle_get_row_count, handle_get_thumbnail, handle_get_view_state, handle_reset,
    handle_run_check, handle_seed_board, handle_select, ServerCtx,
};
use drc_review::session::protocol::{error_codes, Request, Response};
use drc_review::units::{mil, Unit};
use std::io::{self, BufRead, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "drc-review-server", about = "DRC violation review session over stdio")]
struct Args {
    /// Grid unit used when formatting violation values.
    #[arg(long, default_value = "mil")]
    unit: Unit,

    /// Color depth previews are rendered at, in bits per pixel.
    #[arg(long, default_value_t = 32)]
    depth: u8,

    /// Clearance for the built-in check, in mils.
    #[arg(long, default_value_t = 10)]
    clearance_mil: i64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    info!(unit = %args.unit, depth = args.depth, "starting DRC review server");

    let mut ctx = ServerCtx::new(args.unit, args.depth, mil(args.clearance_mil));
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let request: Request = match serde_json::from_str(&line) {
            Ok(req) => req,
            Err(e) => {
                error!("failed to parse request: {}", e);
                let response =
                    Response::error(None, error_codes::PARSE_ERROR, e.to_string());
                writeln!(stdout, "{}", serde_json::to_string(&response)?)?;
                stdout.flush()?;
                continue;
            }
        };

        if request.method == "Shutdown" {
            let response = Response::success(request.id, serde_json::json!({"status": "ok"}));
            writeln!(stdout, "{}", serde_json::to_string(&response)?)?;
            stdout.flush()?;
            break;
        }

        let response = match request.method.as_str() {
            "SeedBoard" => handle_seed_board(&mut ctx, request.id, request.params),
            "RunCheck" => handle_run_check(&mut ctx, request.id),
            "Reset" => handle_reset(&mut ctx, request.id),
            "AppendViolation" => handle_append_violation(&mut ctx, request.id, request.params),
            "AppendGroup" => handle_append_group(&mut ctx, request.id, request.params),
            "GetRowCount" => handle_get_row_count(&ctx, request.id),
            "GetRow" => handle_get_row(&ctx, request.id, request.params),
            "GetThumbnail" => handle_get_thumbnail(&mut ctx, request.id, request.params),
            "Select" => handle_select(&mut ctx, request.id, request.params),
            "Activate" => handle_activate(&mut ctx, request.id, request.params),
            "GetViewState" => handle_get_view_state(&ctx, request.id),
            method => Response::error(
                request.id,
                error_codes::METHOD_NOT_FOUND,
                format!("Unknown method: {}", method),
            ),
        };

        writeln!(stdout, "{}", serde_json::to_string(&response)?)?;
        stdout.flush()?;
    }

    info!("DRC review server shutting down");
    Ok(())
}
