//! Fixture talents and an in-memory stand-in for the talent query
//!
//! The page hands the formatted filter view here the same way it would send
//! it to a backend.

use sift_common::{FilterState, FilterValue, DEFAULT_LIMIT_PER_PAGE};

const TALENT_COUNT: u32 = 57;

const FIRST_NAMES: &[&str] = &[
    "Ada", "Budi", "Citra", "Dewi", "Eko", "Fajar", "Gita", "Hana", "Indra", "Joko", "Kartika",
    "Lestari", "Made", "Nadia", "Oka", "Putri", "Rizky", "Sari", "Tono",
];

const LAST_NAMES: &[&str] = &["Wijaya", "Santoso", "Halim", "Pratama", "Kusuma", "Siregar"];

pub const CITIES: &[&str] = &["Bandung", "Jakarta", "Malang", "Surabaya", "Yogyakarta"];

pub const STATUSES: &[(&str, &str)] = &[
    ("active", "Active"),
    ("inactive", "Inactive"),
    ("on_leave", "On leave"),
];

#[derive(Clone, Debug, PartialEq)]
pub struct Talent {
    pub id: u32,
    pub name: String,
    pub city: &'static str,
    pub status: &'static str,
    pub grade: i64,
    pub verified: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TalentPage {
    pub rows: Vec<Talent>,
    /// Matching rows before pagination
    pub total: usize,
    pub limit: u32,
}

pub fn get_talents() -> Vec<Talent> {
    (1..=TALENT_COUNT)
        .map(|id| {
            let i = id as usize;
            Talent {
                id,
                name: format!(
                    "{} {}",
                    FIRST_NAMES[i % FIRST_NAMES.len()],
                    LAST_NAMES[(i * 7) % LAST_NAMES.len()]
                ),
                city: CITIES[(i * 3) % CITIES.len()],
                status: STATUSES[i % STATUSES.len()].0,
                grade: ((i * 37) % 101) as i64,
                verified: i % 4 != 0,
            }
        })
        .collect()
}

fn int(filter: &FilterState, key: &str) -> Option<i64> {
    filter.get(key).and_then(FilterValue::parse_int)
}

/// Apply a formatted filter view: search, filters, sort, then skip/limit.
///
/// A non-empty `orderBy` wins over the configured `sort`.
pub fn query_talents(filter: &FilterState) -> TalentPage {
    let title = filter.get_str("title").map(str::to_lowercase);
    let status = filter.get_str("status");
    let city = filter.get_str("city");
    let verified = filter.get("verified").and_then(FilterValue::as_bool);
    let grade_min = int(filter, "passingGradeMin");
    let grade_max = int(filter, "passingGradeMax");

    let mut rows: Vec<Talent> = get_talents()
        .into_iter()
        .filter(|t| {
            title
                .as_deref()
                .map_or(true, |title| t.name.to_lowercase().contains(title))
        })
        .filter(|t| status.map_or(true, |status| t.status == status))
        .filter(|t| city.map_or(true, |city| t.city == city))
        .filter(|t| verified.map_or(true, |verified| t.verified == verified))
        .filter(|t| grade_min.map_or(true, |min| t.grade >= min))
        .filter(|t| grade_max.map_or(true, |max| t.grade <= max))
        .collect();

    let sort = filter
        .get_str("orderBy")
        .or_else(|| filter.get_str("sort"))
        .unwrap_or("-_id");
    let (descending, field) = match sort.strip_prefix('-') {
        Some(field) => (true, field),
        None => (false, sort),
    };
    match field {
        "name" => rows.sort_by(|a, b| a.name.cmp(&b.name)),
        "grade" => rows.sort_by_key(|t| t.grade),
        _ => rows.sort_by_key(|t| t.id),
    }
    if descending {
        rows.reverse();
    }

    let total = rows.len();
    let limit = int(filter, "limit")
        .and_then(|limit| u32::try_from(limit).ok())
        .filter(|limit| *limit > 0)
        .unwrap_or(DEFAULT_LIMIT_PER_PAGE);
    let skip = int(filter, "skip")
        .and_then(|skip| usize::try_from(skip).ok())
        .unwrap_or(0);

    TalentPage {
        rows: rows.into_iter().skip(skip).take(limit as usize).collect(),
        total,
        limit,
    }
}
