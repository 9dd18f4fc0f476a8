// parser.rs

/// Splits a command line into words, honoring single and double quotes.
pub fn split_words(line: &str) -> Vec<String> {
    enum State { Normal, Single, Double }
    let mut words = Vec::new();
    let mut cur = String::new();
    // a quoted empty string ('' or "") still counts as a word
    let mut quoted = false;
    let mut state = State::Normal;
    let mut chars = line.chars().peekable();
    while let Some(ch) = chars.next() {
        match state {
            State::Normal => match ch {
                '\'' => {
                    state = State::Single;
                    quoted = true;
                }
                '"' => {
                    state = State::Double;
                    quoted = true;
                }
                '\\' => {
                    if let Some(next) = chars.next() {
                        cur.push(next);
                    }
                }
                c if c.is_whitespace() => {
                    if !cur.is_empty() || quoted {
                        words.push(std::mem::take(&mut cur));
                        quoted = false;
                    }
                }
                _ => cur.push(ch),
            },
            State::Single => match ch {
                '\'' => state = State::Normal,
                _ => cur.push(ch),
            },
            State::Double => match ch {
                '"' => state = State::Normal,
                '\\' => match chars.peek() {
                    Some(&(next @ ('\\' | '"' | '$'))) => {
                        cur.push(next);
                        chars.next();
                    }
                    _ => cur.push('\\'),
                },
                _ => cur.push(ch),
            },
        }
    }
    if !cur.is_empty() || quoted {
        words.push(cur);
    }
    words
}
