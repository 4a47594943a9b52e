//! Extraction of a proposed schedule from raw model output.
//!
//! Model completions arrive with arbitrary chatter around the payload: a
//! reasoning preamble, Markdown code fences, or both. These helpers strip
//! that wrapping and then try the two supported payload shapes, JSON first,
//! XML second. Any structural problem yields `None`; the caller decides what
//! an unparseable completion is worth (typically zero).

use regex::Regex;
use serde_json::Value;

use crate::models::event::ProposalEvent;

/// Strip a full-body Markdown code fence, then (when allowed) a leading
/// `<think>...</think>` block. The fence is only recognized when it wraps the
/// entire trimmed body, so a fence hiding behind a reasoning block survives
/// and the payload fails to parse.
fn strip_wrapping(text: &str, allow_reasoning_tag: bool) -> Option<String> {
    let mut body = text.trim().to_string();

    let fence = Regex::new(r"(?s)^```(?:json|xml)?\s*(.*?)\s*```$").ok()?;
    if let Some(captures) = fence.captures(&body) {
        body = captures.get(1)?.as_str().trim().to_string();
    }

    if allow_reasoning_tag {
        let think = Regex::new(r"(?s)^<think>.*?</think>\s*").ok()?;
        body = think.replace(&body, "").trim().to_string();
    }

    Some(body)
}

/// Parse a completion into proposal events, accepting JSON or XML payloads.
pub fn parse_schedule_any(text: &str, allow_reasoning_tag: bool) -> Option<Vec<ProposalEvent>> {
    let body = strip_wrapping(text, allow_reasoning_tag)?;
    parse_schedule_json(&body).or_else(|| parse_schedule_xml(&body))
}

/// Parse a JSON schedule of the form
/// `{"schedule": [{"name": .., "start": "HH:MM", "end": "HH:MM"}, ..]}`.
///
/// Every entry must carry all three fields; one malformed entry invalidates
/// the whole payload. An empty schedule array is a valid, empty proposal.
pub fn parse_schedule_json(text: &str) -> Option<Vec<ProposalEvent>> {
    let value: Value = serde_json::from_str(text).ok()?;
    let entries = value.as_object()?.get("schedule")?.as_array()?;

    let mut events = Vec::with_capacity(entries.len());
    for entry in entries {
        let obj = entry.as_object()?;
        events.push(ProposalEvent::new(
            scalar_to_string(obj.get("name")?)?,
            scalar_to_string(obj.get("start")?)?,
            scalar_to_string(obj.get("end")?)?,
        ));
    }
    Some(events)
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Parse an XML schedule of the form
/// `<schedule><event><name>..</name><start>..</start><end>..</end></event>...</schedule>`.
///
/// The `<schedule>` element must be the entire body; surrounding prose makes
/// the payload unparseable. An event missing any field, or a schedule with no
/// events at all, also yields `None`.
pub fn parse_schedule_xml(text: &str) -> Option<Vec<ProposalEvent>> {
    let schedule = Regex::new(r"(?si)^<schedule>(.*?)</schedule>$").ok()?;
    let event_block = Regex::new(r"(?s)<event>(.*?)</event>").ok()?;

    let inner = schedule.captures(text.trim())?.get(1)?.as_str();

    let mut events = Vec::new();
    for block in event_block.captures_iter(inner) {
        let body = block.get(1)?.as_str();
        events.push(ProposalEvent::new(
            xml_field(body, "name")?,
            xml_field(body, "start")?,
            xml_field(body, "end")?,
        ));
    }

    if events.is_empty() {
        return None;
    }
    Some(events)
}

fn xml_field(body: &str, tag: &str) -> Option<String> {
    let field = Regex::new(&format!(r"(?s)<{tag}>(.*?)</{tag}>")).ok()?;
    let value = field.captures(body)?.get(1)?.as_str().trim();
    if value.is_empty() {
        return None;
    }
    Some(value.to_string())
}
