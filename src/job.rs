use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::{
    args::Operation,
    grid::{parse_grid, to_compact_json, to_pretty_json},
    sheets::{AppendRequest, GetRequest, SheetsApi},
};

/// A fully validated request, ready to be sent.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Get(GetRequest),
    Append(AppendRequest),
}

/// Checks everything that can be checked locally, before any credentials are loaded.
pub fn prepare(operation: Operation) -> Result<Request> {
    match operation {
        Operation::GetAsJson(req) => Ok(Request::Get(req)),
        Operation::AppendData(raw) => {
            let values = parse_grid(&raw.json).with_context(|| {
                format!(
                    "Parsing data for spreadsheet {} sheet {} range {} failed",
                    raw.target.spreadsheet_id, raw.target.sheet, raw.target.range
                )
            })?;
            Ok(Request::Append(AppendRequest::new(raw.target, raw.dimension, values)))
        }
    }
}

/// Sends the request and returns the text to print on stdout.
///
/// Nothing is printed here: the output is rendered completely first so that a failure
/// never leaves a partial document behind.
pub async fn execute<A: SheetsApi + ?Sized>(request: &Request, api: &A) -> Result<String> {
    match request {
        Request::Get(req) => get_as_json(req, api).await,
        Request::Append(req) => append_data(req, api).await,
    }
}

async fn get_as_json<A: SheetsApi + ?Sized>(req: &GetRequest, api: &A) -> Result<String> {
    let t = &req.target;
    let context = || {
        format!(
            "Getting spreadsheet {} sheet {} range {} failed",
            t.spreadsheet_id, t.sheet, t.range
        )
    };

    let grid = api.get_values(req).await.with_context(context)?;
    let output = to_pretty_json(&grid).with_context(context)?;
    info!("{}", to_compact_json(&grid)?);

    Ok(output)
}

async fn append_data<A: SheetsApi + ?Sized>(req: &AppendRequest, api: &A) -> Result<String> {
    let t = &req.target;
    let context = || {
        format!(
            "Appending to spreadsheet {} sheet {} range {} failed",
            t.spreadsheet_id, t.sheet, t.range
        )
    };

    debug!("Append request: {:?}", req);
    let response = api.append_values(req).await.with_context(context)?;
    let output = to_pretty_json(&response).with_context(context)?;
    info!("{}", to_compact_json(&response)?);

    Ok(output)
}
