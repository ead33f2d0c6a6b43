use atelier_types::Item;

/// Text content of the item detail panel, derived from the item's raw
/// fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemText {
    pub title: Option<String>,
    pub description_points: Vec<String>,
    pub feature_points: Vec<String>,
    pub purpose: Option<String>,
}

impl ItemText {
    /// When everything is absent the panel renders a single
    /// "no description" placeholder instead of empty sections.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description_points.is_empty()
            && self.feature_points.is_empty()
            && self.purpose.is_none()
    }
}

pub fn compose(item: &Item) -> ItemText {
    ItemText {
        title: non_empty(&item.name),
        description_points: item
            .description
            .as_deref()
            .map(description_points)
            .unwrap_or_default(),
        feature_points: item
            .features
            .as_deref()
            .map(feature_points)
            .unwrap_or_default(),
        purpose: item.purpose.as_deref().and_then(non_empty),
    }
}

/// Split on a period or semicolon followed by whitespace (or end of input);
/// trim each segment, drop empty ones, order preserved.
pub fn description_points(text: &str) -> Vec<String> {
    let mut points = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '.' || c == ';' {
            match chars.peek() {
                Some(next) if next.is_whitespace() => {
                    while chars.peek().is_some_and(|n| n.is_whitespace()) {
                        chars.next();
                    }
                    flush(&mut current, &mut points);
                }
                None => flush(&mut current, &mut points),
                // Mid-token punctuation ("3.5 cm") is not a delimiter.
                Some(_) => current.push(c),
            }
        } else {
            current.push(c);
        }
    }
    flush(&mut current, &mut points);
    points
}

/// Split on comma or semicolon, no whitespace requirement; trim, drop
/// empty segments.
pub fn feature_points(text: &str) -> Vec<String> {
    text.split([',', ';'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Photo list: `images` when non-empty, else a one-element list from
/// `image`, else empty.
pub fn photos(item: &Item) -> Vec<&str> {
    if !item.images.is_empty() {
        item.images.iter().map(String::as_str).collect()
    } else if let Some(image) = item.image.as_deref() {
        vec![image]
    } else {
        Vec::new()
    }
}

fn flush(current: &mut String, points: &mut Vec<String>) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        points.push(trimmed.to_string());
    }
    current.clear();
}

fn non_empty(s: &str) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}
