//! Overlay planning
//!
//! Turns the latest detections into draw commands for a canvas laid over
//! the video. Pure: the host executes the commands against its own canvas.

use ewa_common::models::Detection;

pub const LINE_WIDTH: f64 = 3.0;
pub const LABEL_FONT: &str = "16px Arial";
pub const LABEL_TEXT_COLOR: &str = "#000000";
/// Label background height, measured down from `baseline - 20`
pub const LABEL_BOX_HEIGHT: f64 = 25.0;
/// Horizontal padding added to the measured label width
pub const LABEL_PADDING: f64 = 10.0;

/// Intrinsic size of the playing video
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameDimensions {
    pub width: u32,
    pub height: u32,
}

impl FrameDimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// A video reports zero width until its metadata has loaded
    pub fn is_ready(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Resize the canvas to the frame if needed, then clear it
    Clear { width: u32, height: u32 },

    StrokeRect {
        rect: Rect,
        color: String,
        line_width: f64,
    },

    /// Text label with a filled background
    ///
    /// The background is `text_width + padding` wide (the host measures the
    /// text in `font`) and `box_height` tall, with its top at `baseline - 20`.
    /// Text is drawn at `(x + padding / 2, baseline)`.
    Label {
        text: String,
        x: f64,
        baseline: f64,
        background: String,
        foreground: String,
        font: String,
        box_height: f64,
        padding: f64,
    },
}

/// `"{class_name} {percent}%"` with the percentage rounded to a whole number
pub fn label_text(detection: &Detection) -> String {
    format!(
        "{} {}%",
        detection.class_name,
        (detection.confidence * 100.0).round() as i64
    )
}

/// Baseline for a label above the box, or inside it when too near the top edge
fn label_baseline(y1: f64) -> f64 {
    if y1 > 25.0 {
        y1 - 5.0
    } else {
        y1 + 20.0
    }
}

/// Scale factor from detection image space to video space
fn scale(video: u32, image: Option<u32>) -> f64 {
    match image {
        Some(image) if image > 0 => f64::from(video) / f64::from(image),
        _ => 1.0,
    }
}

/// Plan one overlay frame
///
/// Always starts with [`DrawCommand::Clear`]; then a box and a label for each
/// detection whose confidence is at least `threshold`, in input order.
pub fn plan_frame(
    frame: FrameDimensions,
    detections: &[Detection],
    threshold: f64,
    color: &str,
) -> Vec<DrawCommand> {
    let mut commands = vec![DrawCommand::Clear {
        width: frame.width,
        height: frame.height,
    }];

    for detection in detections.iter().filter(|d| d.confidence >= threshold) {
        let sx = scale(frame.width, detection.image_width);
        let sy = scale(frame.height, detection.image_height);

        let rect = Rect {
            x: detection.x1 * sx,
            y: detection.y1 * sy,
            width: (detection.x2 - detection.x1) * sx,
            height: (detection.y2 - detection.y1) * sy,
        };

        commands.push(DrawCommand::StrokeRect {
            rect,
            color: color.to_string(),
            line_width: LINE_WIDTH,
        });
        commands.push(DrawCommand::Label {
            text: label_text(detection),
            x: rect.x,
            baseline: label_baseline(rect.y),
            background: color.to_string(),
            foreground: LABEL_TEXT_COLOR.to_string(),
            font: LABEL_FONT.to_string(),
            box_height: LABEL_BOX_HEIGHT,
            padding: LABEL_PADDING,
        });
    }

    commands
}
