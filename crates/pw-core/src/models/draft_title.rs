/// Title for a new draft: `{prefix}{n}` where `n` starts one past the number
/// of existing projects and is bumped until no existing title matches.
pub fn next_draft_title<S: AsRef<str>>(prefix: &str, existing: &[S]) -> String {
    let mut number = existing.len() + 1;
    loop {
        let candidate = format!("{}{}", prefix, number);
        if !existing.iter().any(|title| title.as_ref() == candidate) {
            return candidate;
        }
        number += 1;
    }
}
