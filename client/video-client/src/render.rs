//! Plain-text grid rendering for terminals

use crate::models::Video;
use crate::view::VideoListView;

/// Inner width of a card, in characters
pub const CARD_WIDTH: usize = 34;
const GUTTER: usize = 2;
const MAX_COLUMNS: usize = 4;

pub const LOADING_MESSAGE: &str = "Loading videos...";
pub const NO_MATCHES_MESSAGE: &str = "No videos match the search";

/// How many cards fit side by side in `width` terminal columns (1 to 4)
pub fn columns_for_width(width: usize) -> usize {
    let per_card = CARD_WIDTH + 2 + GUTTER;
    (width / per_card).clamp(1, MAX_COLUMNS)
}

/// Render the view for a terminal `width` columns wide
pub fn render(view: &VideoListView, width: usize) -> String {
    let Some(videos) = view.visible() else {
        return LOADING_MESSAGE.to_string();
    };

    if videos.is_empty() {
        return NO_MATCHES_MESSAGE.to_string();
    }

    let columns = columns_for_width(width);
    let mut out = String::new();

    for row in videos.chunks(columns) {
        let cards: Vec<Vec<String>> = row.iter().map(|video| card(video)).collect();
        let height = cards.iter().map(Vec::len).max().unwrap_or(0);

        for line in 0..height {
            let joined: Vec<&str> = cards
                .iter()
                .map(|card| card.get(line).map(String::as_str).unwrap_or(""))
                .collect();
            out.push_str(joined.join(" ".repeat(GUTTER).as_str()).trim_end());
            out.push('\n');
        }
    }

    out
}

fn card(video: &Video) -> Vec<String> {
    let border = format!("+{}+", "-".repeat(CARD_WIDTH));
    let uploaded = video
        .uploaded
        .map(|ts| ts.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string());

    vec![
        border.clone(),
        boxed(&format!("#{} {}", video.id, video.title)),
        boxed(&video.url),
        boxed(&format!("rating: {}", video.rating)),
        boxed(&format!("uploaded: {uploaded}")),
        border,
    ]
}

fn boxed(text: &str) -> String {
    format!("|{:<width$}|", truncate(text, CARD_WIDTH), width = CARD_WIDTH)
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(3)).collect();
    format!("{kept}...")
}
