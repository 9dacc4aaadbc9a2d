/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Parsers for the order bar and status listing responses.
//!
//! Both answers are XML-ish envelopes wrapping HTML fragments. Any missing tag,
//! attribute or marker is reported as [`AppError::ResponseShape`]: it means the
//! site changed and nothing sensible can be inferred.

use crate::constants::{
    LIVE_ORDER_ID_END, LIVE_ORDER_ID_MARKER, ORDER_REJECTED, PREVIEW_ORDER_ID_END,
    PREVIEW_ORDER_ID_MARKER,
};
use crate::error::AppError;
use crate::presentation::order::{OrderConfirmation, OrderStatus};
use crate::utils::parsing::{
    all_inner, first_inner, markup_text, parse_attributes, slice_between, slice_enclosing,
    xml_text,
};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use tracing::debug;

/// Element regex capturing the inner markup; a self-closing tag matches with no content
fn element_re(tag: &str) -> Regex {
    Regex::new(&format!(r"(?is)<{tag}\b[^>]*?(?:/>|>(.*?)</{tag}\s*>)"))
        .expect("valid element regex")
}

static SUCCESS_RE: Lazy<Regex> = Lazy::new(|| element_re("success"));
static ACTIONDATA_RE: Lazy<Regex> = Lazy::new(|| element_re("actiondata"));
static ERRCODE_RE: Lazy<Regex> = Lazy::new(|| element_re("errcode"));
static TH_RE: Lazy<Regex> = Lazy::new(|| element_re("th"));
static TD_RE: Lazy<Regex> = Lazy::new(|| element_re("td"));
static ORDERSTATUS_RE: Lazy<Regex> = Lazy::new(|| element_re("orderstatus"));
static STATUS_RE: Lazy<Regex> = Lazy::new(|| element_re("status"));
static INPUT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<input\b([^>]*)>").expect("valid input regex"));

fn required_text(re: &Regex, doc: &str, tag: &str) -> Result<String, AppError> {
    first_inner(re, doc)
        .map(|inner| xml_text(inner).trim().to_string())
        .ok_or_else(|| AppError::shape(format!("missing <{tag}> in order response")))
}

/// Parses the order bar response
///
/// `preview` selects which order id marker is looked for: preview
/// confirmations carry an `id="…"` attribute, live ones a reference number
/// sentence.
pub fn parse_order_confirmation(body: &str, preview: bool) -> Result<OrderConfirmation, AppError> {
    let success = required_text(&SUCCESS_RE, body, "success")?;
    let actiondata = first_inner(&ACTIONDATA_RE, body)
        .map(|inner| markup_text(inner).trim().to_string())
        .ok_or_else(|| AppError::shape("missing <actiondata> in order response"))?;
    let errcode = required_text(&ERRCODE_RE, body, "errcode")?;

    if success == ORDER_REJECTED {
        debug!("Order rejected, errcode {:?}", errcode);
        return Ok(OrderConfirmation::Rejected {
            actiondata,
            errcode,
        });
    }

    let fields = parse_confirmation_table(&actiondata)?;
    let (mode, start, end) = if preview {
        ("preview", PREVIEW_ORDER_ID_MARKER, PREVIEW_ORDER_ID_END)
    } else {
        ("live", LIVE_ORDER_ID_MARKER, LIVE_ORDER_ID_END)
    };
    let order_id = slice_between(&actiondata, start, end)
        .ok_or_else(|| AppError::shape(format!("missing {mode} order id in order response")))?
        .trim()
        .to_string();

    debug!("Order accepted ({}), id {}", success, order_id);
    Ok(OrderConfirmation::Accepted {
        success,
        fields,
        order_id,
        errcode,
    })
}

/// Pairs the `<th>` and `<td>` cells of the first table in `actiondata`
///
/// Pairing is positional, the table has a single row of each. Surplus data
/// cells are ignored. No table yields no fields.
pub fn parse_confirmation_table(actiondata: &str) -> Result<HashMap<String, String>, AppError> {
    let Some(table) = slice_enclosing(actiondata, "<table", "</table>") else {
        debug!("No confirmation table in order response");
        return Ok(HashMap::new());
    };

    let headers = all_inner(&TH_RE, table);
    let cells = all_inner(&TD_RE, table);
    if cells.len() < headers.len() {
        return Err(AppError::shape(format!(
            "confirmation table has {} headers but {} cells",
            headers.len(),
            cells.len()
        )));
    }

    Ok(headers
        .iter()
        .zip(cells.iter())
        .map(|(header, cell)| (xml_text(header), xml_text(cell)))
        .collect())
}

/// Parses the order status listing into one record per `<orderstatus>`, in document order
pub fn parse_order_statuses(body: &str) -> Result<Vec<OrderStatus>, AppError> {
    all_inner(&ORDERSTATUS_RE, body)
        .into_iter()
        .enumerate()
        .map(|(index, order)| {
            let status = first_inner(&STATUS_RE, order).ok_or_else(|| {
                AppError::shape(format!("order status #{index} has no <status> block"))
            })?;
            parse_status_inputs(status)
                .map_err(|e| AppError::shape(format!("order status #{index}: {e}")))
        })
        .collect()
}

fn parse_status_inputs(status: &str) -> Result<OrderStatus, String> {
    let mut record = OrderStatus::new();
    for caps in INPUT_RE.captures_iter(status) {
        let mut attrs = parse_attributes(&caps[1]);
        let name = attrs
            .remove("name")
            .ok_or_else(|| format!("input without name: {}", &caps[0]))?;
        let value = attrs
            .remove("value")
            .ok_or_else(|| format!("input {name} without value"))?;
        record.insert(name, value);
    }
    Ok(record)
}
