//! Profession ranking and directory filtering.
//!
//! This module lives in `core` (zero internal deps) so it can be used by both
//! the API layer and any future CLI or import tooling. All functions are pure:
//! the caller fetches candidate rows and hands borrowed fields in.

// ---------------------------------------------------------------------------
// Relevance weights
// ---------------------------------------------------------------------------

/// Score for a query term appearing inside a department name (either language).
pub const SCORE_DEPARTMENT_CONTAINS: i32 = 10;

/// Score for a query term appearing inside a role title (either language).
pub const SCORE_ROLE_CONTAINS: i32 = 20;

/// Additional score for exact equality with a role title.
pub const SCORE_ROLE_EXACT: i32 = 30;

/// Additional score for exact equality with a department name.
pub const SCORE_DEPARTMENT_EXACT: i32 = 15;

// ---------------------------------------------------------------------------
// Query limits
// ---------------------------------------------------------------------------

/// Queries shorter than this (after trimming) are not searched at all.
pub const MIN_QUERY_LEN: usize = 2;

/// Maximum number of ranked profession results.
pub const MAX_RESULTS: usize = 20;

// ---------------------------------------------------------------------------
// Query normalization
// ---------------------------------------------------------------------------

/// Normalize a free-text query into lowercased whitespace-separated terms.
///
/// Returns `None` when the trimmed query is shorter than [`MIN_QUERY_LEN`]
/// characters; callers must then skip the fetch entirely and present an empty
/// result set.
///
/// # Examples
///
/// ```
/// use guild_core::search::query_terms;
/// assert_eq!(query_terms("  Camera Crew "), Some(vec!["camera".to_string(), "crew".to_string()]));
/// assert_eq!(query_terms("a"), None);
/// assert_eq!(query_terms("   "), None);
/// ```
pub fn query_terms(query: &str) -> Option<Vec<String>> {
    let trimmed = query.trim();
    if trimmed.chars().count() < MIN_QUERY_LEN {
        return None;
    }
    Some(
        trimmed
            .to_lowercase()
            .split_whitespace()
            .map(str::to_string)
            .collect(),
    )
}

// ---------------------------------------------------------------------------
// Profession ranking
// ---------------------------------------------------------------------------

/// Borrowed bilingual fields of a profession candidate.
#[derive(Debug, Clone, Copy)]
pub struct ProfessionFields<'a> {
    pub department_th: &'a str,
    pub department_en: &'a str,
    pub role_th: &'a str,
    pub role_en: &'a str,
}

/// A candidate index paired with its accumulated match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedMatch {
    /// Index of the candidate in the caller's fetch order.
    pub index: usize,
    pub score: i32,
}

/// Score one candidate against normalized query terms.
///
/// Components accumulate additively across terms; a term matching several
/// components adds each of them. Matching is case-insensitive substring
/// containment, with equality bonuses on top.
pub fn score_profession(terms: &[String], candidate: &ProfessionFields<'_>) -> i32 {
    let department_th = candidate.department_th.to_lowercase();
    let department_en = candidate.department_en.to_lowercase();
    let role_th = candidate.role_th.to_lowercase();
    let role_en = candidate.role_en.to_lowercase();

    let mut score = 0;
    for term in terms {
        if department_th.contains(term.as_str()) || department_en.contains(term.as_str()) {
            score += SCORE_DEPARTMENT_CONTAINS;
        }
        if role_th.contains(term.as_str()) || role_en.contains(term.as_str()) {
            score += SCORE_ROLE_CONTAINS;
        }
        if role_th == *term || role_en == *term {
            score += SCORE_ROLE_EXACT;
        }
        if department_th == *term || department_en == *term {
            score += SCORE_DEPARTMENT_EXACT;
        }
    }
    score
}

/// Rank profession candidates against normalized query terms.
///
/// - Candidates with a zero score are dropped.
/// - Duplicate `(department_en, role_en)` keys keep the first-seen candidate,
///   regardless of the later one's score.
/// - Results are sorted by descending score; equal scores preserve the
///   caller's fetch order (stable sort).
/// - At most [`MAX_RESULTS`] entries are returned.
pub fn rank_professions<'a>(
    terms: &[String],
    candidates: impl IntoIterator<Item = ProfessionFields<'a>>,
) -> Vec<RankedMatch> {
    let mut seen_keys: Vec<String> = Vec::new();
    let mut matches: Vec<RankedMatch> = Vec::new();

    for (index, candidate) in candidates.into_iter().enumerate() {
        let key = format!("{}-{}", candidate.department_en, candidate.role_en);
        if seen_keys.contains(&key) {
            continue;
        }
        seen_keys.push(key);

        let score = score_profession(terms, &candidate);
        if score > 0 {
            matches.push(RankedMatch { index, score });
        }
    }

    matches.sort_by(|a, b| b.score.cmp(&a.score));
    matches.truncate(MAX_RESULTS);
    matches
}

// ---------------------------------------------------------------------------
// Directory filter
// ---------------------------------------------------------------------------

/// Borrowed bilingual fields of a member for free-text filtering.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemberFields<'a> {
    pub fullname_th: &'a str,
    pub fullname_en: &'a str,
    pub nickname_th: &'a str,
    pub nickname_en: &'a str,
    pub role_th: &'a str,
    pub role_en: &'a str,
}

/// Whether any bilingual member field contains any query term
/// (case-insensitive substring match).
pub fn member_matches(terms: &[String], fields: &MemberFields<'_>) -> bool {
    let haystacks = [
        fields.fullname_th,
        fields.fullname_en,
        fields.nickname_th,
        fields.nickname_en,
        fields.role_th,
        fields.role_en,
    ];
    terms.iter().any(|term| {
        haystacks
            .iter()
            .any(|h| h.to_lowercase().contains(term.as_str()))
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(query: &str) -> Vec<String> {
        query_terms(query).expect("query should produce terms")
    }

    const CAMERA_DP: ProfessionFields<'static> = ProfessionFields {
        department_th: "กำกับภาพ",
        department_en: "Camera",
        role_th: "ผู้กำกับภาพ",
        role_en: "Director of Photography",
    };

    // -- query_terms ---------------------------------------------------------

    #[test]
    fn terms_lowercase_and_split() {
        assert_eq!(
            query_terms("Camera  Crew"),
            Some(vec!["camera".to_string(), "crew".to_string()])
        );
    }

    #[test]
    fn query_shorter_than_two_chars_yields_none() {
        assert_eq!(query_terms(""), None);
        assert_eq!(query_terms("a"), None);
        assert_eq!(query_terms("  a  "), None);
    }

    #[test]
    fn thai_single_char_query_yields_none() {
        // One Thai character is one char even though it is three UTF-8 bytes.
        assert_eq!(query_terms("ก"), None);
        assert!(query_terms("กข").is_some());
    }

    // -- score_profession ----------------------------------------------------

    #[test]
    fn spec_example_scores_twenty() {
        // "ผู้กำกับ" appears inside role_th but not inside department_th
        // ("กำกับภาพ" does not contain "ผู้กำกับ"), and is not an exact role.
        let score = score_profession(&terms("ผู้กำกับ"), &CAMERA_DP);
        assert_eq!(score, SCORE_ROLE_CONTAINS);
    }

    #[test]
    fn exact_role_match_adds_both_components() {
        let candidate = ProfessionFields {
            department_th: "ตัดต่อ",
            department_en: "Editing",
            role_th: "ผู้ลำดับภาพ",
            role_en: "Editor",
        };
        // "editor" is contained in role_en and equal to it.
        let score = score_profession(&terms("editor"), &candidate);
        assert_eq!(score, SCORE_ROLE_CONTAINS + SCORE_ROLE_EXACT);
    }

    #[test]
    fn exact_department_match_adds_both_components() {
        // "camera" is contained in department_en and equal to it.
        let score = score_profession(&terms("camera"), &CAMERA_DP);
        assert_eq!(score, SCORE_DEPARTMENT_CONTAINS + SCORE_DEPARTMENT_EXACT);
    }

    #[test]
    fn scores_accumulate_across_terms() {
        // Both terms independently hit role_en.
        let score = score_profession(&terms("director photography"), &CAMERA_DP);
        assert_eq!(score, 2 * SCORE_ROLE_CONTAINS);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let score = score_profession(&terms("CAMERA"), &CAMERA_DP);
        assert_eq!(score, SCORE_DEPARTMENT_CONTAINS + SCORE_DEPARTMENT_EXACT);
    }

    #[test]
    fn unrelated_term_scores_zero() {
        assert_eq!(score_profession(&terms("sound"), &CAMERA_DP), 0);
    }

    // -- rank_professions ----------------------------------------------------

    fn sound_candidate() -> ProfessionFields<'static> {
        ProfessionFields {
            department_th: "เสียง",
            department_en: "Sound",
            role_th: "นักออกแบบเสียง",
            role_en: "Sound Designer",
        }
    }

    #[test]
    fn non_matching_candidates_are_dropped() {
        let ranked = rank_professions(&terms("camera"), [CAMERA_DP, sound_candidate()]);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].index, 0);
    }

    #[test]
    fn results_sorted_by_descending_score() {
        let assistant = ProfessionFields {
            department_th: "กำกับภาพ",
            department_en: "Camera",
            role_th: "ผู้ช่วยช่างภาพ",
            role_en: "Camera Assistant",
        };
        // `assistant` first in fetch order; "photography" only matches the DP
        // role, so the DP must still rank first despite coming second.
        let ranked = rank_professions(&terms("photography"), [assistant, CAMERA_DP]);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].index, 1);

        let ranked = rank_professions(&terms("camera"), [assistant, CAMERA_DP]);
        assert_eq!(ranked.len(), 2);
        assert!(ranked[0].score >= ranked[1].score);
    }

    #[test]
    fn equal_scores_preserve_fetch_order() {
        let a = ProfessionFields {
            department_th: "แสง",
            department_en: "Lighting",
            role_th: "ช่างไฟ",
            role_en: "Gaffer Alpha",
        };
        let b = ProfessionFields {
            department_th: "แสง",
            department_en: "Lighting",
            role_th: "ช่างไฟ",
            role_en: "Gaffer Bravo",
        };
        let ranked = rank_professions(&terms("gaffer"), [a, b]);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].index, 0);
        assert_eq!(ranked[1].index, 1);
        assert_eq!(ranked[0].score, ranked[1].score);
    }

    #[test]
    fn duplicate_keys_keep_first_seen_regardless_of_score() {
        // Same (department_en, role_en) key; the second row would score
        // higher because its Thai fields also match, but it must be skipped.
        let weaker = ProfessionFields {
            department_th: "-",
            department_en: "Camera",
            role_th: "-",
            role_en: "Director of Photography",
        };
        let ranked = rank_professions(&terms("camera director"), [weaker, CAMERA_DP]);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].index, 0);
        assert_eq!(
            ranked[0].score,
            score_profession(&terms("camera director"), &weaker)
        );
    }

    #[test]
    fn results_truncated_to_max() {
        let role_names: Vec<String> = (0..40).map(|i| format!("Camera Operator {i}")).collect();
        let candidates: Vec<ProfessionFields<'_>> = role_names
            .iter()
            .map(|role_en| ProfessionFields {
                department_th: "กำกับภาพ",
                department_en: "Camera",
                role_th: "ช่างกล้อง",
                role_en,
            })
            .collect();
        let ranked = rank_professions(&terms("camera"), candidates);
        assert_eq!(ranked.len(), MAX_RESULTS);
    }

    // -- member_matches ------------------------------------------------------

    #[test]
    fn member_matches_any_bilingual_field() {
        let fields = MemberFields {
            fullname_th: "สมชาย ใจดี",
            fullname_en: "Somchai Jaidee",
            nickname_th: "ชาย",
            nickname_en: "Chai",
            role_th: "ผู้กำกับ",
            role_en: "Director",
        };
        assert!(member_matches(&terms("somchai"), &fields));
        assert!(member_matches(&terms("ผู้กำกับ"), &fields));
        assert!(member_matches(&terms("chai"), &fields));
        assert!(!member_matches(&terms("producer"), &fields));
    }

    #[test]
    fn member_matches_is_case_insensitive() {
        let fields = MemberFields {
            fullname_en: "Somchai Jaidee",
            ..Default::default()
        };
        assert!(member_matches(&terms("JAIDEE"), &fields));
    }
}
