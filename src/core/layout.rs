use crate::domain::model::{DrawCommand, FontSpec, Rect};

/// Lay the payload out inside `bounds`, one source line per text row,
/// left/top aligned. No wrapping or pagination: rows that fall outside the
/// bounds are still emitted and the page clip hides them.
pub fn render_page(bounds: &Rect, font: &FontSpec, payload: &str) -> Vec<DrawCommand> {
    let mut commands = vec![
        DrawCommand::Clip(*bounds),
        DrawCommand::SetFont {
            name: font.name.clone(),
            size: font.size,
        },
    ];

    let leading = font.leading();
    // First baseline sits one em below the top edge.
    let mut baseline = bounds.top + font.size;

    for line in payload_lines(payload) {
        if !line.is_empty() {
            commands.push(DrawCommand::Text {
                x: bounds.left,
                baseline,
                text: expand_tabs(line),
            });
        }
        baseline += leading;
    }

    commands
}

/// Splits on `\n`, dropping a trailing `\r` from each line and the empty
/// line after a final newline.
fn payload_lines(payload: &str) -> impl Iterator<Item = &str> {
    let body = payload.strip_suffix('\n').unwrap_or(payload);
    body.split('\n').map(|line| line.strip_suffix('\r').unwrap_or(line))
}

const TAB_WIDTH: usize = 8;

fn expand_tabs(line: &str) -> String {
    if !line.contains('\t') {
        return line.to_string();
    }

    let mut out = String::with_capacity(line.len() + TAB_WIDTH);
    let mut column = 0;
    for c in line.chars() {
        if c == '\t' {
            let pad = TAB_WIDTH - column % TAB_WIDTH;
            out.extend(std::iter::repeat(' ').take(pad));
            column += pad;
        } else {
            out.push(c);
            column += 1;
        }
    }
    out
}
