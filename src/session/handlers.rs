//! Request handlers for the review server binary, organized per method.

use crate::board::{
    BoardObject, BoardRaster, BoardStore, ClearanceEngine, RecordingView, SharedBoardStore,
};
use crate::session::protocol::{error_codes, Response};
use crate::session::review::ReviewSession;
use crate::units::{Coord, Unit};
use crate::view::list::{ListError, Row};
use crate::view::record::ViolationRecord;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::cell::RefCell;
use std::rc::Rc;

/// Everything one server process owns: the review session plus direct
/// handles on the shared collaborators for seeding and inspection.
pub struct ServerCtx {
    pub session: ReviewSession,
    pub store: SharedBoardStore,
    pub view: RecordingView,
}

impl ServerCtx {
    pub fn new(unit: Unit, depth: u8, clearance: Coord) -> Self {
        let store: SharedBoardStore = Rc::new(RefCell::new(BoardStore::new()));
        let view = RecordingView::new();
        let session = ReviewSession::new(
            unit,
            depth,
            Box::new(BoardRaster::new(store.clone())),
            Box::new(store.clone()),
            Box::new(view.clone()),
            Box::new(ClearanceEngine::new(store.clone(), clearance)),
        );
        Self {
            session,
            store,
            view,
        }
    }
}

fn parse_params<T: DeserializeOwned>(
    id: Option<serde_json::Value>,
    params: Option<serde_json::Value>,
    expected: &str,
) -> Result<T, Response> {
    params
        .and_then(|p| serde_json::from_value(p).ok())
        .ok_or_else(|| {
            Response::error(
                id,
                error_codes::INVALID_PARAMS,
                format!("Invalid params: expected {}", expected),
            )
        })
}

fn row_error(id: Option<serde_json::Value>, err: ListError) -> Response {
    Response::error(id, error_codes::ROW_OUT_OF_RANGE, err.to_string())
}

/// Handle SeedBoard - replaces the board contents for the demo collaborators
pub fn handle_seed_board(
    ctx: &mut ServerCtx,
    id: Option<serde_json::Value>,
    params: Option<serde_json::Value>,
) -> Response {
    #[derive(Deserialize)]
    struct Params {
        objects: Vec<BoardObject>,
    }

    let p: Params = match parse_params(id.clone(), params, "{objects: [{id, kind, bounds}]}") {
        Ok(p) => p,
        Err(e) => return e,
    };

    let count = p.objects.len();
    ctx.store.borrow_mut().replace_all(p.objects);
    Response::success(id, serde_json::json!({ "status": "ok", "count": count }))
}

/// Handle RunCheck - clears the list and re-runs the clearance check
pub fn handle_run_check(ctx: &mut ServerCtx, id: Option<serde_json::Value>) -> Response {
    ctx.session.refresh();
    Response::success(
        id,
        serde_json::json!({ "status": "ok", "violation_count": ctx.session.row_count() }),
    )
}

/// Handle Reset - clears the list and restarts display numbering
pub fn handle_reset(ctx: &mut ServerCtx, id: Option<serde_json::Value>) -> Response {
    ctx.session.reset();
    Response::success(id, serde_json::json!({ "status": "ok" }))
}

/// Handle AppendViolation - ingests one finding from an external engine
pub fn handle_append_violation(
    ctx: &mut ServerCtx,
    id: Option<serde_json::Value>,
    params: Option<serde_json::Value>,
) -> Response {
    let record: ViolationRecord =
        match parse_params(id.clone(), params, "a violation record object") {
            Ok(r) => r,
            Err(e) => return e,
        };

    let row = ctx.session.append_violation(&record);
    let number = ctx.session.row_number(row).ok().flatten();
    Response::success(id, serde_json::json!({ "row": row, "number": number }))
}

/// Handle AppendGroup - inserts a header row used to cluster violations
pub fn handle_append_group(
    ctx: &mut ServerCtx,
    id: Option<serde_json::Value>,
    params: Option<serde_json::Value>,
) -> Response {
    #[derive(Deserialize)]
    struct Params {
        title: String,
    }

    let p: Params = match parse_params(id.clone(), params, "{title}") {
        Ok(p) => p,
        Err(e) => return e,
    };

    let row = ctx.session.append_group(&p.title);
    Response::success(id, serde_json::json!({ "row": row }))
}

/// Handle GetRowCount
pub fn handle_get_row_count(ctx: &ServerCtx, id: Option<serde_json::Value>) -> Response {
    Response::success(id, serde_json::json!({ "count": ctx.session.row_count() }))
}

/// Handle GetRow - display number, markup, and plain text for one row
pub fn handle_get_row(
    ctx: &ServerCtx,
    id: Option<serde_json::Value>,
    params: Option<serde_json::Value>,
) -> Response {
    #[derive(Deserialize)]
    struct Params {
        row: usize,
    }

    let p: Params = match parse_params(id.clone(), params, "{row}") {
        Ok(p) => p,
        Err(e) => return e,
    };

    let number = match ctx.session.row_number(p.row) {
        Ok(n) => n,
        Err(e) => return row_error(id, e),
    };
    let markup = ctx.session.row_markup(p.row).unwrap_or_default();
    let text = ctx.session.row_text(p.row).unwrap_or_default();
    let group = match &ctx.session.model().rows()[p.row] {
        Row::Group { title } => Some(title.clone()),
        Row::Leaf { .. } => None,
    };

    Response::success(
        id,
        serde_json::json!({
            "number": number,
            "markup": markup,
            "text": text,
            "group": group,
        }),
    )
}

/// Handle GetThumbnail - base64 wire pixmap, or null when no image exists
pub fn handle_get_thumbnail(
    ctx: &mut ServerCtx,
    id: Option<serde_json::Value>,
    params: Option<serde_json::Value>,
) -> Response {
    #[derive(Deserialize)]
    struct Params {
        row: usize,
    }

    let p: Params = match parse_params(id.clone(), params, "{row}") {
        Ok(p) => p,
        Err(e) => return e,
    };

    match ctx.session.row_thumbnail(p.row) {
        Ok(pixmap) => Response::success(
            id,
            serde_json::json!({ "image": pixmap.map(|p| p.to_base64()) }),
        ),
        Err(e) => row_error(id, e),
    }
}

/// Handle Select - selection-changed event; null row means deselect
pub fn handle_select(
    ctx: &mut ServerCtx,
    id: Option<serde_json::Value>,
    params: Option<serde_json::Value>,
) -> Response {
    #[derive(Deserialize)]
    struct Params {
        row: Option<usize>,
    }

    let p: Params = match parse_params(id.clone(), params, "{row: number|null}") {
        Ok(p) => p,
        Err(e) => return e,
    };

    ctx.session.selection_changed(p.row);
    Response::success(
        id,
        serde_json::json!({ "selection": format!("{:?}", ctx.session.selection()) }),
    )
}

/// Handle Activate - row-activated event (double invocation)
pub fn handle_activate(
    ctx: &mut ServerCtx,
    id: Option<serde_json::Value>,
    params: Option<serde_json::Value>,
) -> Response {
    #[derive(Deserialize)]
    struct Params {
        row: usize,
    }

    let p: Params = match parse_params(id.clone(), params, "{row}") {
        Ok(p) => p,
        Err(e) => return e,
    };

    ctx.session.row_activated(p.row);
    Response::success(
        id,
        serde_json::json!({ "selection": format!("{:?}", ctx.session.selection()) }),
    )
}

/// Handle GetViewState - recorded view effects plus flagged object ids
pub fn handle_get_view_state(ctx: &ServerCtx, id: Option<serde_json::Value>) -> Response {
    let counters = ctx.view.counters();
    let flagged = ctx.store.borrow().flagged_ids();
    Response::success(
        id,
        serde_json::json!({ "view": counters, "flagged": flagged }),
    )
}
