//! Wire Codec
//!
//! Byte layouts spoken with the search daemon, the flow daemon, the context
//! helper and the slicer. Everything here is pure; the adapters do the I/O.
//!
//! ## Formats
//!
//! | Exchange | Request | Response |
//! |----------|---------|----------|
//! | Search | `offset \0 lower \0 upper \0 query` | `path \t offset \t length` lines, then the total |
//! | Completion | `\0 lower \0 upper \0 query` | `path \t offset \t context` lines |
//! | Flow socket | `path \0 offset \0 length` | `epoch \t clientPort \t serverPort \t context` |
//! | Flow helper | `path \t offset \t length \n` | `_ \t offset \t epoch \t port0 \t port1 \t context \n` |
//! | Slicer `loc` | positional arguments | `start end` on stdout |
//!
//! Delimiter bytes inside fields are never escaped; the daemons do not
//! expect it.

use psw_domain::constants::{
    FRAME_FIELD_SEPARATOR, LINE_FIELD_SEPARATOR, LINE_FIELD_SEPARATOR_BYTE,
};
use psw_domain::error::{Error, Result};
use psw_domain::value_objects::{
    FlowKey, FlowMetadata, FlowSpan, HitDetail, HitRecord, NormalizedQuery, SearchScope,
};
use std::str::FromStr;

// ============================================================================
// Search daemon
// ============================================================================

/// Encode a search or completion frame
///
/// Completion frames carry no page offset; the field is left empty.
pub fn encode_search_request(
    page_offset: Option<u64>,
    scope: &SearchScope,
    query: &NormalizedQuery,
) -> Vec<u8> {
    let offset = page_offset.map(|o| o.to_string()).unwrap_or_default();
    let sep = FRAME_FIELD_SEPARATOR;
    format!(
        "{offset}{sep}{}{sep}{}{sep}{}",
        scope.lower(),
        scope.upper(),
        query.as_str()
    )
    .into_bytes()
}

/// Decode a search response into its hits and the unclamped total
///
/// The last non-empty line is the total. A missing or non-numeric total, or
/// a hit line that does not carry three fields, makes the whole response
/// malformed. Paths are kept byte for byte; only the numeric fields need to
/// be text.
pub fn decode_search_response(body: &[u8]) -> Result<(Vec<HitRecord>, u64)> {
    let mut lines: Vec<&[u8]> = body
        .split(|&b| b == b'\n')
        .filter(|line| !line.is_empty())
        .collect();

    let total_line = lines
        .pop()
        .ok_or_else(|| Error::protocol("search response carries no total"))?;
    let total = parse_field::<u64>(&String::from_utf8_lossy(total_line), "total")?;

    let hits = lines
        .into_iter()
        .map(decode_search_hit)
        .collect::<Result<Vec<_>>>()?;
    Ok((hits, total))
}

fn decode_search_hit(line: &[u8]) -> Result<HitRecord> {
    let mut fields = line.splitn(3, |&b| b == LINE_FIELD_SEPARATOR_BYTE);
    let (Some(path), Some(offset), Some(length)) = (fields.next(), fields.next(), fields.next())
    else {
        return Err(Error::protocol(format!(
            "hit line '{}' has fewer than three fields",
            String::from_utf8_lossy(line).escape_debug()
        )));
    };
    Ok(HitRecord::from_raw_path(
        path,
        parse_field(&String::from_utf8_lossy(offset), "hit offset")?,
        HitDetail::Length(parse_field(&String::from_utf8_lossy(length), "hit length")?),
    ))
}

/// Decode a completion response
///
/// Lines that are not `path \t offset \t context` are kept as bare
/// suggestions.
pub fn decode_completion_response(body: &[u8]) -> Vec<HitRecord> {
    body.split(|&b| b == b'\n')
        .filter(|line| !line.is_empty())
        .map(decode_completion_line)
        .collect()
}

fn decode_completion_line(line: &[u8]) -> HitRecord {
    let mut fields = line.splitn(3, |&b| b == LINE_FIELD_SEPARATOR_BYTE);
    match (fields.next(), fields.next(), fields.next()) {
        (Some(path), Some(offset), Some(context)) if !path.is_empty() => {
            match String::from_utf8_lossy(offset).parse::<u64>() {
                Ok(offset) => HitRecord::from_raw_path(
                    path,
                    offset,
                    HitDetail::Context(String::from_utf8_lossy(context).into_owned()),
                ),
                Err(_) => HitRecord::bare(String::from_utf8_lossy(line)),
            }
        }
        _ => HitRecord::bare(String::from_utf8_lossy(line)),
    }
}

// ============================================================================
// Flow daemon
// ============================================================================

/// Encode a flow socket request
pub fn encode_flow_request(key: &FlowKey) -> Vec<u8> {
    let sep = FRAME_FIELD_SEPARATOR;
    let mut frame = key.path.clone();
    frame.extend_from_slice(format!("{sep}{}{sep}{}", key.offset, key.length).as_bytes());
    frame
}

/// Decode a flow socket response
///
/// The daemon answers client port before server port; `port0` is the
/// server side.
pub fn decode_flow_response(body: &[u8]) -> Result<FlowMetadata> {
    let text = String::from_utf8_lossy(body);
    let text = text.strip_suffix('\n').unwrap_or(&text);

    let mut fields = text.splitn(4, LINE_FIELD_SEPARATOR);
    let (Some(epoch), Some(client_port), Some(server_port), Some(context)) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(Error::protocol("flow response has fewer than four fields"));
    };

    Ok(FlowMetadata {
        epoch: parse_field(epoch, "epoch")?,
        port0: parse_field(server_port, "server port")?,
        port1: parse_field(client_port, "client port")?,
        context: context.to_string(),
    })
}

// ============================================================================
// Context helper
// ============================================================================

/// Encode one request line for the context helper
pub fn encode_flow_line(key: &FlowKey) -> Vec<u8> {
    let sep = LINE_FIELD_SEPARATOR;
    let mut line = key.path.clone();
    line.extend_from_slice(format!("{sep}{}{sep}{}\n", key.offset, key.length).as_bytes());
    line
}

/// Decode one response line of the context helper
///
/// The echoed offset must match the request, otherwise the helper has
/// fallen out of step.
pub fn decode_flow_line(line: &str, expected_offset: u64) -> Result<FlowMetadata> {
    let line = line.strip_suffix('\n').unwrap_or(line);
    let mut fields = line.splitn(6, LINE_FIELD_SEPARATOR);
    let (Some(_), Some(offset), Some(epoch), Some(port0), Some(port1), Some(context)) = (
        fields.next(),
        fields.next(),
        fields.next(),
        fields.next(),
        fields.next(),
        fields.next(),
    ) else {
        return Err(Error::protocol(format!(
            "helper line '{}' has fewer than six fields",
            line.escape_debug()
        )));
    };

    let offset: u64 = parse_field(offset, "echoed offset")?;
    if offset != expected_offset {
        return Err(Error::protocol(format!(
            "helper answered offset {offset}, expected {expected_offset}"
        )));
    }

    Ok(FlowMetadata {
        epoch: parse_field(epoch, "epoch")?,
        port0: parse_field(port0, "port0")?,
        port1: parse_field(port1, "port1")?,
        context: context.to_string(),
    })
}

// ============================================================================
// Slicer
// ============================================================================

/// Decode the two integers the slicer prints for `loc`
pub fn decode_locate_output(stdout: &[u8]) -> Option<FlowSpan> {
    let text = String::from_utf8_lossy(stdout);
    let mut numbers = text.split_whitespace().map(str::parse::<u64>);
    match (numbers.next(), numbers.next()) {
        (Some(Ok(start)), Some(Ok(end))) => Some(FlowSpan { start, end }),
        _ => None,
    }
}

fn parse_field<T: FromStr>(value: &str, name: &str) -> Result<T> {
    value.trim().parse().map_err(|_| {
        Error::protocol(format!("{name} '{}' is not a number", value.escape_debug()))
    })
}
