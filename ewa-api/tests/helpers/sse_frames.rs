//! Minimal parser for SSE response bodies produced by the relay

/// One received SSE event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub event: Option<String>,
    pub data: String,
    pub id: Option<String>,
}

/// Split a complete `text/event-stream` body into events
///
/// Comment-only blocks (keep-alives) are skipped.
pub fn parse_frames(body: &str) -> Vec<Frame> {
    body.split("\n\n")
        .filter_map(|block| {
            let mut event = None;
            let mut id = None;
            let mut data: Vec<&str> = Vec::new();

            for line in block.lines() {
                if line.is_empty() || line.starts_with(':') {
                    continue;
                }
                let (field, value) = match line.split_once(':') {
                    Some((field, value)) => (field, value.strip_prefix(' ').unwrap_or(value)),
                    None => (line, ""),
                };
                match field {
                    "event" => event = Some(value.to_string()),
                    "id" => id = Some(value.to_string()),
                    "data" => data.push(value),
                    _ => {}
                }
            }

            if event.is_none() && id.is_none() && data.is_empty() {
                None
            } else {
                Some(Frame {
                    event,
                    data: data.join("\n"),
                    id,
                })
            }
        })
        .collect()
}
