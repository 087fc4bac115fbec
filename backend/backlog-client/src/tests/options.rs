// Unit tests for option validation and per-resource wrappers

use crate::error::BacklogError;
use crate::options::{
    ActivityOption, ApplyOption, FORMAT_MARKDOWN, ORDER_ASC, ORDER_DESC, ProjectOption,
    WikiOption, apply_options,
};
use crate::params::RequestParams;

fn invalid_message(err: BacklogError) -> String {
    match err {
        BacklogError::InvalidOption { message, .. } => message,
        other => panic!("expected InvalidOption, got {other:?}"),
    }
}

/// **VALUE**: Verifies the inclusive 1..=100 window of `count`.
///
/// **WHY THIS MATTERS**: The API rejects 0 and 101 with a 400; failing locally
/// keeps the request off the wire and gives a precise message.
///
/// **BUG THIS CATCHES**: Off-by-one in either bound.
#[test]
fn given_count_boundaries_when_applied_then_only_1_through_100_pass() {
    for accepted in [1, 100] {
        let mut params = RequestParams::new();
        ActivityOption::count(accepted).apply(&mut params).unwrap();
        assert_eq!(params.get("count").unwrap(), [accepted.to_string()]);
    }

    for rejected in [0, 101] {
        let mut params = RequestParams::new();
        let err = ActivityOption::count(rejected).apply(&mut params).unwrap_err();
        assert_eq!(invalid_message(err), "count must be between 1 and 100");
        assert!(params.is_empty(), "Rejected option must not write");
    }
}

/// **VALUE**: Verifies activity type ids are validated as a whole list.
///
/// **WHY THIS MATTERS**: A partially written list would filter on a subset
/// the caller never asked for.
///
/// **BUG THIS CATCHES**: Would catch validating and appending in the same
/// loop, which leaves `[1]` behind when `[1, 27]` is rejected.
#[test]
fn given_activity_type_ids_when_applied_then_bounds_are_1_and_26() {
    let mut params = RequestParams::new();
    ActivityOption::activity_type_ids(vec![1, 26])
        .apply(&mut params)
        .unwrap();
    assert_eq!(params.get("activityTypeId[]").unwrap(), ["1", "26"]);

    for bad in [vec![0], vec![27], vec![1, 27, 3]] {
        let mut params = RequestParams::new();
        let err = ActivityOption::activity_type_ids(bad)
            .apply(&mut params)
            .unwrap_err();
        assert_eq!(invalid_message(err), "activityTypeId must be between 1 and 26");
        assert!(params.is_empty(), "Mixed list must record nothing");
    }
}

#[test]
fn given_order_values_when_applied_then_only_asc_or_desc_pass() {
    let mut params = RequestParams::new();
    ActivityOption::order(ORDER_ASC).apply(&mut params).unwrap();
    ActivityOption::order(ORDER_DESC).apply(&mut params).unwrap();
    assert_eq!(params.get("order").unwrap(), ["desc"]);

    let err = ActivityOption::order("sideways")
        .apply(&mut RequestParams::new())
        .unwrap_err();
    assert_eq!(invalid_message(err), "order must be only 'asc' or 'desc'");
}

#[test]
fn given_min_and_max_ids_when_below_one_then_rejected() {
    let mut params = RequestParams::new();
    ActivityOption::min_id(1).apply(&mut params).unwrap();
    ActivityOption::max_id(99).apply(&mut params).unwrap();
    assert_eq!(params.encode(), "minId=1&maxId=99");

    let min_err = ActivityOption::min_id(0).apply(&mut params).unwrap_err();
    let max_err = ActivityOption::max_id(-5).apply(&mut params).unwrap_err();
    assert_eq!(invalid_message(min_err), "minId must be greater than 1");
    assert_eq!(invalid_message(max_err), "maxId must be greater than 1");
}

/// **VALUE**: Verifies boolean project flags serialize as `true`/`false`.
///
/// **BUG THIS CATCHES**: Would catch `1`/`0` or `True` leaking into the form.
#[test]
fn given_project_flags_when_applied_then_booleans_are_lowercase_words() {
    let mut params = RequestParams::new();
    let options = [
        ProjectOption::chart_enabled(true),
        ProjectOption::subtasking_enabled(false),
        ProjectOption::project_leader_can_edit_project_leader(true),
        ProjectOption::archived(false),
        ProjectOption::text_formatting_rule(FORMAT_MARKDOWN),
    ];

    apply_options(&mut params, &options).unwrap();

    assert_eq!(
        params.encode(),
        "chartEnabled=true&subtaskingEnabled=false&projectLeaderCanEditProjectLeader=true\
         &archived=false&textFormattingRule=markdown"
    );
}

#[test]
fn given_unknown_format_when_applied_then_rejected() {
    let err = ProjectOption::text_formatting_rule("html")
        .apply(&mut RequestParams::new())
        .unwrap_err();

    assert_eq!(invalid_message(err), "format must be only 'backlog' or 'markdown'");
}

#[test]
fn given_empty_strings_when_applied_then_each_names_its_key() {
    let cases = [
        (ProjectOption::key("").apply(&mut RequestParams::new()), "key must not be empty"),
        (ProjectOption::name("").apply(&mut RequestParams::new()), "name must not be empty"),
        (WikiOption::content("").apply(&mut RequestParams::new()), "content must not be empty"),
    ];

    for (result, expected) in cases {
        assert_eq!(invalid_message(result.unwrap_err()), expected);
    }
}

/// **VALUE**: Verifies option lists stop at the first failure.
///
/// **WHY THIS MATTERS**: The caller gets the first problem back verbatim and
/// later options never run.
///
/// **BUG THIS CATCHES**: Would catch a loop that collects errors and keeps
/// applying, which would write `mailNotify` after the failing `content`.
#[test]
fn given_failing_option_in_list_when_applied_then_later_options_do_not_run() {
    let mut params = RequestParams::new();
    let options = [
        WikiOption::name("Home"),
        WikiOption::content(""),
        WikiOption::mail_notify(true),
    ];

    let err = apply_options(&mut params, &options).unwrap_err();

    assert_eq!(invalid_message(err), "content must not be empty");
    assert!(params.contains_key("name"));
    assert!(!params.contains_key("mailNotify"));
}
