use crate::github::PullRequest;

const HEADER: &str = "*Open pull request overview*";

/// Per-run summary of open pull requests, grouped by configured display name.
///
/// Entries keep configuration-file order and duplicates are kept as-is; the
/// digest is built once per run and discarded after formatting.
#[derive(Debug, Default)]
pub struct Digest {
    entries: Vec<DigestEntry>,
}

#[derive(Debug)]
struct DigestEntry {
    repo_name: String,
    pulls: Vec<PullRequest>,
}

impl Digest {
    pub fn new() -> Self {
        Digest::default()
    }

    pub fn push(&mut self, repo_name: impl Into<String>, pulls: Vec<PullRequest>) {
        self.entries.push(DigestEntry {
            repo_name: repo_name.into(),
            pulls,
        });
    }

    /// Render the digest as one Slack-markup string.
    ///
    /// One header line, then per repository either a count header with one
    /// `- <url|title>` bullet per PR or a single "No open PRs." line.
    /// Deterministic: identical input yields byte-identical output.
    pub fn format_message(&self) -> String {
        let mut lines = vec![HEADER.to_string()];

        for entry in &self.entries {
            if entry.pulls.is_empty() {
                lines.push(format!("\n*{}*: No open PRs.", entry.repo_name));
            } else {
                lines.push(format!(
                    "\n*{}* ({} open):",
                    entry.repo_name,
                    entry.pulls.len()
                ));
                for pr in &entry.pulls {
                    lines.push(format!("- <{}|{}>", pr.html_url, pr.title));
                }
            }
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pr(title: &str, url: &str) -> PullRequest {
        PullRequest {
            title: title.to_string(),
            html_url: url.to_string(),
        }
    }

    #[test]
    fn test_digest_with_one_pr() {
        let mut digest = Digest::new();
        digest.push("A", vec![pr("Fix bug", "https://github.com/org/a/pull/1")]);

        let message = digest.format_message();
        assert!(message.starts_with("*Open pull request overview*"));
        assert!(message.contains("*A* (1 open):"));
        assert!(message.contains("- <https://github.com/org/a/pull/1|Fix bug>"));
    }

    #[test]
    fn test_digest_with_no_prs() {
        let mut digest = Digest::new();
        digest.push("B", vec![]);

        let message = digest.format_message();
        assert!(message.contains("*B*: No open PRs."));
        assert!(!message.contains("(0 open)"));
    }

    #[test]
    fn test_digest_keeps_insertion_order() {
        let mut digest = Digest::new();
        digest.push("B", vec![]);
        digest.push("A", vec![pr("Fix bug", "https://github.com/org/a/pull/1")]);

        let message = digest.format_message();
        let b_pos = message.find("*B*").unwrap();
        let a_pos = message.find("*A*").unwrap();
        assert!(b_pos < a_pos);
    }

    #[test]
    fn test_digest_keeps_duplicate_names() {
        let mut digest = Digest::new();
        digest.push("A", vec![]);
        digest.push("A", vec![]);

        let message = digest.format_message();
        assert_eq!(message.matches("*A*: No open PRs.").count(), 2);
    }

    #[test]
    fn test_empty_digest_is_header_only() {
        let digest = Digest::new();
        assert_eq!(digest.format_message(), "*Open pull request overview*");
    }

    #[test]
    fn test_format_is_deterministic() {
        let mut digest = Digest::new();
        digest.push("A", vec![pr("Fix bug", "https://github.com/org/a/pull/1")]);
        digest.push("B", vec![]);

        assert_eq!(digest.format_message(), digest.format_message());
    }

    #[test]
    fn test_full_message_layout() {
        let mut digest = Digest::new();
        digest.push(
            "A",
            vec![
                pr("Fix bug", "https://github.com/org/a/pull/1"),
                pr("Add feature", "https://github.com/org/a/pull/2"),
            ],
        );
        digest.push("B", vec![]);

        let expected = "*Open pull request overview*\n\
                        \n\
                        *A* (2 open):\n\
                        - <https://github.com/org/a/pull/1|Fix bug>\n\
                        - <https://github.com/org/a/pull/2|Add feature>\n\
                        \n\
                        *B*: No open PRs.";
        assert_eq!(digest.format_message(), expected);
    }
}
