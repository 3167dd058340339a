use serde::{Deserialize, Deserializer};
use utoipa::IntoParams;

pub const QUESTIONS_PER_PAGE: usize = 10;

#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
pub struct PageQuery {
    /// 1-based page number; anything that is not an integer falls back to 1
    #[serde(default = "default_page", deserialize_with = "lenient_page")]
    pub page: i64,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
        }
    }
}

fn default_page() -> i64 {
    1
}

fn lenient_page<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().parse().unwrap_or_else(|_| default_page()))
}

impl PageQuery {
    pub fn slice<T>(&self, items: Vec<T>) -> Vec<T> {
        paginate(items, self.page, QUESTIONS_PER_PAGE)
    }
}

/// Returns the `page`th block of `per_page` items.
///
/// Bounds follow slice-with-negative-index semantics: the block is
/// `[(page - 1) * per_page, page * per_page)`, a negative bound counts from
/// the end of the list and both bounds are clamped to the list length. Page 0
/// therefore yields nothing, while negative pages address blocks counted
/// backwards from the end.
pub fn paginate<T>(items: Vec<T>, page: i64, per_page: usize) -> Vec<T> {
    let len = items.len() as i64;
    let per_page = per_page as i64;

    let start = page.saturating_sub(1).saturating_mul(per_page);
    let end = start.saturating_add(per_page);

    let resolve = |index: i64| {
        let index = if index < 0 { index + len } else { index };
        index.clamp(0, len) as usize
    };
    let (start, end) = (resolve(start), resolve(end));

    if start >= end {
        return Vec::new();
    }

    items.into_iter().skip(start).take(end - start).collect()
}
