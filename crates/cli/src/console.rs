use notes_core::domain::RankedAuthor;
use notes_core::error::ExportError;
use notes_core::ports::{AuthorSelector, Result};
use std::cell::RefCell;
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use tracing::debug;

/// Interactive menu reading the choice from a line-oriented input
pub struct ConsoleSelector<R, W> {
    input: RefCell<R>,
    output: RefCell<W>,
}

impl ConsoleSelector<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleSelector<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: RefCell::new(input),
            output: RefCell::new(output),
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output.into_inner()
    }
}

/// Parses a menu answer into a zero-based index, if it is within `1..=options`.
pub fn parse_choice(line: &str, options: usize) -> Option<usize> {
    match line.trim().parse::<usize>() {
        Ok(n) if (1..=options).contains(&n) => Some(n - 1),
        _ => None,
    }
}

fn print_menu(output: &mut impl Write, ranked: &[RankedAuthor]) -> io::Result<()> {
    writeln!(output, "--- 请选择一个作者 (Top 5) ---")?;
    for (i, author) in ranked.iter().enumerate() {
        writeln!(output, "{}. {} (出现次数: {})", i + 1, author.name, author.count)?;
    }
    writeln!(output, "---------------------------------")
}

fn prompt(
    input: &mut impl BufRead,
    output: &mut impl Write,
    ranked: &[RankedAuthor],
) -> io::Result<Option<String>> {
    print_menu(output, ranked)?;

    let options = ranked.len();
    let mut line = String::new();
    loop {
        write!(output, "请输入选项 (1-{}): ", options)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output, "\n未读取到输入，已退出。")?;
            return Ok(None);
        }

        match parse_choice(&line, options) {
            Some(idx) => {
                let selected = ranked[idx].name.clone();
                writeln!(output, "\n您选择了: {}", selected)?;
                return Ok(Some(selected));
            }
            None => {
                debug!(input = line.trim_end(), "rejected menu input");
                writeln!(output, "输入无效，请输入 1 到 {} 之间的一个数字。", options)?;
            }
        }
    }
}

impl<R: BufRead, W: Write> AuthorSelector for ConsoleSelector<R, W> {
    fn select(&self, ranked: &[RankedAuthor]) -> Result<Option<String>> {
        let mut input = self.input.borrow_mut();
        let mut output = self.output.borrow_mut();
        prompt(&mut *input, &mut *output, ranked).map_err(ExportError::Console)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn ranked(names: &[(&str, usize)]) -> Vec<RankedAuthor> {
        names
            .iter()
            .map(|(name, count)| RankedAuthor {
                name: name.to_string(),
                count: *count,
            })
            .collect()
    }

    fn run_selector(input: &str, authors: &[RankedAuthor]) -> (Option<String>, String) {
        let selector = ConsoleSelector::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let selected = selector.select(authors).unwrap();
        let output = String::from_utf8(selector.into_output()).unwrap();
        (selected, output)
    }

    #[test]
    fn test_parse_choice() {
        assert_eq!(parse_choice("1\n", 3), Some(0));
        assert_eq!(parse_choice(" 3 \r\n", 3), Some(2));
        assert_eq!(parse_choice("0", 3), None);
        assert_eq!(parse_choice("4", 3), None);
        assert_eq!(parse_choice("abc", 3), None);
        assert_eq!(parse_choice("-1", 3), None);
        assert_eq!(parse_choice("", 3), None);
    }

    #[test]
    fn test_menu_lists_authors_with_counts() {
        let authors = ranked(&[("Alice", 2), ("Bob", 1)]);
        let (selected, output) = run_selector("1\n", &authors);

        assert_eq!(selected.as_deref(), Some("Alice"));
        assert!(output.contains("1. Alice (出现次数: 2)\n"));
        assert!(output.contains("2. Bob (出现次数: 1)\n"));
        assert!(output.contains("您选择了: Alice"));
    }

    #[test]
    fn test_out_of_range_input_reprompts() {
        let authors = ranked(&[("A", 3), ("B", 2), ("C", 1)]);
        let (selected, output) = run_selector("9\nfoo\n3\n", &authors);

        assert_eq!(selected.as_deref(), Some("C"));
        assert_eq!(output.matches("输入无效，请输入 1 到 3 之间的一个数字。").count(), 2);
        assert_eq!(output.matches("请输入选项 (1-3): ").count(), 3);
    }

    #[test]
    fn test_end_of_input_returns_none() {
        let authors = ranked(&[("A", 1)]);
        let (selected, output) = run_selector("7\n", &authors);

        assert_eq!(selected, None);
        assert!(output.contains("未读取到输入"));
    }
}
