//! Rendering of API responses for the terminal.

use serde_json::Value;

use crate::infra::github::ApiResponse;
use crate::shared::table::{self, Column};

const NAME_WIDTH: usize = 40;
const VISIBILITY_WIDTH: usize = 10;
const GIST_ID_WIDTH: usize = 32;
const FILES_WIDTH: usize = 5;

pub(super) fn json(value: &ApiResponse) -> anyhow::Result<String> {
    Ok(format!("{}\n", serde_json::to_string_pretty(value)?))
}

/// Render a repository listing as a table. Anything other than an array
/// (typically a GitHub error object) is printed as JSON.
pub(super) fn repositories(value: &ApiResponse) -> anyhow::Result<String> {
    let Some(items) = value.as_array() else {
        return json(value);
    };

    let rows: Vec<Vec<String>> = items
        .iter()
        .map(|repo| {
            let visibility = match repo.get("private").and_then(Value::as_bool) {
                Some(true) => "private",
                Some(false) => "public",
                None => "",
            };
            vec![
                str_field(repo, "full_name"),
                visibility.to_string(),
                str_field(repo, "description"),
            ]
        })
        .collect();

    let columns = [
        Column::fixed("NAME", NAME_WIDTH),
        Column::fixed("VISIBILITY", VISIBILITY_WIDTH),
        Column::flexible("DESCRIPTION"),
    ];
    Ok(table::render(&columns, &rows))
}

/// Render a gist listing as a table. Non-arrays are printed as JSON.
pub(super) fn gists(value: &ApiResponse) -> anyhow::Result<String> {
    let Some(items) = value.as_array() else {
        return json(value);
    };

    let rows: Vec<Vec<String>> = items
        .iter()
        .map(|gist| {
            let files = gist
                .get("files")
                .and_then(Value::as_object)
                .map_or(0, |files| files.len());
            vec![
                str_field(gist, "id"),
                files.to_string(),
                str_field(gist, "description"),
            ]
        })
        .collect();

    let columns = [
        Column::fixed("ID", GIST_ID_WIDTH),
        Column::fixed("FILES", FILES_WIDTH),
        Column::flexible("DESCRIPTION"),
    ];
    Ok(table::render(&columns, &rows))
}

fn str_field(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
