/// Praise phrases the persona uses only after a student has fixed the
/// weakness it pointed out. Literal, case-sensitive substrings; deliberately
/// a lightweight heuristic, not a grading signal.
pub const PRAISE_KEYWORDS: [&str; 5] =
    ["훌륭합니다", "정확합니다", "통과", "잘했습니다", "탁월합니다"];

/// True if the reply contains any praise keyword, meaning the UI should
/// fire the celebration effect.
pub fn is_praise(reply: &str) -> bool {
    PRAISE_KEYWORDS
        .iter()
        .any(|keyword| reply.contains(keyword))
}
