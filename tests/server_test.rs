//! Protocol-level round trips through the server handlers.

use drc_review::session::handlers::{
    handle_append_group, handle_append_violation, handle_get_row, handle_get_row_count,
    handle_get_thumbnail, handle_get_view_state, handle_run_check, handle_seed_board,
    handle_select, ServerCtx,
};
use drc_review::session::protocol::{error_codes, Response};
use drc_review::units::{mil, Unit};
use serde_json::json;

fn result(response: Response) -> serde_json::Value {
    assert!(response.error.is_none(), "unexpected error: {:?}", response.error);
    response.result.expect("response carries a result")
}

fn seeded_ctx(depth: u8) -> ServerCtx {
    let mut ctx = ServerCtx::new(Unit::Mil, depth, mil(10));
    let response = handle_seed_board(
        &mut ctx,
        None,
        Some(json!({
            "objects": [
                { "id": 1, "kind": "line", "bounds": [0, 0, mil(1), mil(1)] },
                { "id": 2, "kind": "pad", "bounds": [mil(3), 0, mil(4), mil(1)] },
                { "id": 3, "kind": "via", "bounds": [mil(100), mil(100), mil(101), mil(101)] }
            ]
        })),
    );
    assert_eq!(result(response)["count"], 3);
    ctx
}

#[test]
fn test_run_check_finds_the_close_pair() {
    let mut ctx = seeded_ctx(32);
    let outcome = result(handle_run_check(&mut ctx, None));
    assert_eq!(outcome["violation_count"], 1);

    let row = result(handle_get_row(&ctx, None, Some(json!({ "row": 0 }))));
    assert_eq!(row["number"], 1);
    let markup = row["markup"].as_str().unwrap();
    assert!(markup.contains("Copper clearance"));
    assert!(markup.contains("Required: 10.00 mil"));
}

#[test]
fn test_append_violation_numbers_rows() {
    let mut ctx = seeded_ctx(32);
    for expected in 1..=3 {
        let outcome = result(handle_append_violation(
            &mut ctx,
            None,
            Some(json!({
                "title": "Min spacing",
                "x": mil(5),
                "y": mil(5),
                "required_value": mil(10)
            })),
        ));
        assert_eq!(outcome["number"], expected);
    }
    let count = result(handle_get_row_count(&ctx, None));
    assert_eq!(count["count"], 3);
}

#[test]
fn test_get_row_out_of_range() {
    let ctx = seeded_ctx(32);
    let response = handle_get_row(&ctx, None, Some(json!({ "row": 9 })));
    assert_eq!(response.error.unwrap().code, error_codes::ROW_OUT_OF_RANGE);
}

#[test]
fn test_thumbnail_round_trip_and_degraded_depth() {
    let mut ctx = seeded_ctx(32);
    result(handle_run_check(&mut ctx, None));
    let outcome = result(handle_get_thumbnail(&mut ctx, None, Some(json!({ "row": 0 }))));
    assert!(outcome["image"].is_string());

    // A depth the renderer cannot serve degrades to a null image, without
    // an error, and stays degraded on repeat access.
    let mut degraded = seeded_ctx(0);
    result(handle_run_check(&mut degraded, None));
    for _ in 0..2 {
        let outcome =
            result(handle_get_thumbnail(&mut degraded, None, Some(json!({ "row": 0 }))));
        assert!(outcome["image"].is_null());
    }
}

#[test]
fn test_select_flags_objects_and_header_clears() {
    let mut ctx = seeded_ctx(32);
    result(handle_run_check(&mut ctx, None));
    let header = result(handle_append_group(&mut ctx, None, Some(json!({ "title": "Other" }))));
    let header_row = header["row"].as_u64().unwrap();

    result(handle_select(&mut ctx, None, Some(json!({ "row": 0 }))));
    let state = result(handle_get_view_state(&ctx, None));
    assert_eq!(state["flagged"], json!([1, 2]));
    assert_eq!(state["view"]["redraws"], 1);
    assert_eq!(state["view"]["soft_recenters"], 1);

    result(handle_select(&mut ctx, None, Some(json!({ "row": header_row }))));
    let state = result(handle_get_view_state(&ctx, None));
    assert_eq!(state["flagged"], json!([]));
    assert_eq!(state["view"]["redraws"], 2);
}
