use super::*;

#[derive(Debug, Clone)]
pub struct SegmenterRules {
    pub summary: Regex,
    pub dollar_amount: Regex,
    pub monthly_payment: Regex,
    pub title_max_chars: usize,
    pub title_break_chars: usize,
    pub placeholder_code: String,
    pub placeholder_section: String,
}

impl SegmenterRules {
    pub fn looks_like_title(&self, line: &str) -> bool {
        let line = line.trim();
        if line.is_empty() {
            return false;
        }
        if self.dollar_amount.is_match(line) || self.monthly_payment.is_match(line) {
            return false;
        }
        if line.chars().count() > self.title_max_chars {
            return false;
        }

        let mut chars = line.chars();
        let first_is_upper = chars.next().is_some_and(|ch| ch.is_ascii_uppercase());
        let second_fits = chars
            .next()
            .is_some_and(|ch| ch.is_ascii_alphanumeric() || ch == '(');
        first_is_upper && second_fits
    }

    pub fn is_summary(&self, line: &str) -> bool {
        self.summary.is_match(&line.to_uppercase())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SegmenterState {
    #[default]
    NoCurrentItem,
    AccumulatingItem {
        title: String,
        description: Vec<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineAction {
    Terminate,
    StartItem {
        title: String,
        description: Option<String>,
    },
    Continue,
    Discard,
}

pub fn classify_line(rules: &SegmenterRules, state: &SegmenterState, line: &str) -> LineAction {
    if rules.is_summary(line) {
        return LineAction::Terminate;
    }

    if let Some((left, right)) = line.split_once(" - ") {
        let title = left.trim();
        if rules.looks_like_title(title) {
            let remainder = right.trim();
            return LineAction::StartItem {
                title: title.to_string(),
                description: (!remainder.is_empty()).then(|| remainder.to_string()),
            };
        }
    }

    let pending = matches!(state, SegmenterState::AccumulatingItem { .. });

    if rules.looks_like_title(line) {
        if !pending || line.chars().count() < rules.title_break_chars {
            return LineAction::StartItem {
                title: line.trim().to_string(),
                description: None,
            };
        }
        return LineAction::Continue;
    }

    if pending {
        LineAction::Continue
    } else {
        LineAction::Discard
    }
}

pub struct ItemSegmenter<'r> {
    rules: &'r SegmenterRules,
    state: SegmenterState,
    items: Vec<LineItem>,
    terminated: bool,
}

impl<'r> ItemSegmenter<'r> {
    pub fn new(rules: &'r SegmenterRules) -> Self {
        Self {
            rules,
            state: SegmenterState::NoCurrentItem,
            items: Vec::new(),
            terminated: false,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> &SegmenterState {
        &self.state
    }

    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    pub fn push_line(&mut self, line: &str) {
        if self.terminated {
            return;
        }

        match classify_line(self.rules, &self.state, line) {
            LineAction::Terminate => {
                self.flush();
                self.terminated = true;
            }
            LineAction::StartItem { title, description } => {
                self.flush();
                self.state = SegmenterState::AccumulatingItem {
                    title,
                    description: description.into_iter().collect(),
                };
            }
            LineAction::Continue => {
                if let SegmenterState::AccumulatingItem { description, .. } = &mut self.state {
                    description.push(line.trim().to_string());
                }
            }
            LineAction::Discard => {}
        }
    }

    pub fn finish(mut self) -> Vec<LineItem> {
        self.flush();
        self.items
    }

    fn flush(&mut self) {
        let SegmenterState::AccumulatingItem { title, description } =
            std::mem::take(&mut self.state)
        else {
            return;
        };
        if title.is_empty() {
            return;
        }

        let description = collapse_whitespace(&description.join(" "));
        let full_description = if description.is_empty() {
            collapse_whitespace(&title)
        } else {
            collapse_whitespace(&format!("{} - {}", title, description))
        };

        self.items.push(LineItem::placeholder(
            &self.rules.placeholder_code,
            &self.rules.placeholder_section,
            full_description,
        ));
    }
}

pub fn segment_items(rules: &SegmenterRules, lines: &[String]) -> Vec<LineItem> {
    let mut segmenter = ItemSegmenter::new(rules);
    for line in lines {
        segmenter.push_line(line);
        if segmenter.is_terminated() {
            break;
        }
    }
    segmenter.finish()
}
