use crate::{
    engine::RuleTable,
    error::{AutomatonError, Result},
};
use regex::Regex;

/// Longest row a decoder will build
pub const MAX_CELLS: usize = 1 << 24;

pub trait RowCodec {
    fn encode(&self, row: &[u8]) -> String;
    fn decode(&self, value: &str) -> Result<Vec<u8>>;
}

/// One character per cell, `#`/`.` by default
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub alive: char,
    pub dead: char,
}
impl Default for Glyphs {
    fn default() -> Self {
        Self {
            alive: '#',
            dead: '.',
        }
    }
}

impl RowCodec for Glyphs {
    fn encode(&self, row: &[u8]) -> String {
        row.iter()
            .map(|&cell| if cell == 1 { self.alive } else { self.dead })
            .collect()
    }

    fn decode(&self, value: &str) -> Result<Vec<u8>> {
        value
            .trim()
            .chars()
            .map(|c| match c {
                c if c == self.alive => Ok(1),
                c if c == self.dead => Ok(0),
                c => Err(AutomatonError::Decode(format!("unexpected cell glyph {c:?}"))),
            })
            .collect()
    }
}

/// One digit per cell, as dumped to a serial monitor
#[derive(Debug, Clone, Copy, Default)]
pub struct Digits;

impl RowCodec for Digits {
    fn encode(&self, row: &[u8]) -> String {
        row.iter().map(|cell| char::from(b'0' + cell)).collect()
    }

    fn decode(&self, value: &str) -> Result<Vec<u8>> {
        Glyphs {
            alive: '1',
            dead: '0',
        }
        .decode(value)
    }
}

struct RunEncoder {
    sequence: String,
    line_len: usize,
    max_line_len: usize,
}
impl RunEncoder {
    fn new(max_line_len: usize) -> Self {
        Self {
            sequence: String::new(),
            line_len: 0,
            max_line_len,
        }
    }

    fn push_run(&mut self, run: usize, c: char) {
        let append = match run {
            0 => String::new(),
            1 => c.to_string(),
            n => format!("{}{}", n, c),
        };
        if self.line_len + append.len() > self.max_line_len {
            self.sequence.push('\n');
            self.line_len = 0;
        }
        self.line_len += append.len();
        self.sequence.push_str(&append);
    }

    pub fn end(mut self) -> String {
        self.sequence.push('!');
        self.sequence
    }
}

/// Run length encoding of a single row
///
/// ```text
/// #N rule 30 seed
/// x = 9, rule = W30
/// 4bo!
/// ```
///
/// Trailing dead cells are implied by `x`.
pub struct RunLengthEncoded {
    name: Option<String>,
    rule: Option<RuleTable>,
    header: bool,
}
impl RunLengthEncoded {
    pub fn set_name<T: AsRef<str>>(mut self, name: T) -> Self {
        self.name = Some(name.as_ref().to_owned());
        self
    }

    pub fn set_rule(mut self, rule: RuleTable) -> Self {
        self.rule = Some(rule);
        self
    }

    pub fn without_header(mut self) -> Self {
        self.header = false;
        self
    }

    fn encode_header(&self, width: usize) -> String {
        let mut header = String::new();
        if !self.header {
            return header;
        }
        if let Some(name) = &self.name {
            header.push_str(&format!("#N {}\n", name));
        }
        header.push_str(&format!("x = {}", width));
        if let Some(rule) = &self.rule {
            header.push_str(&format!(", rule = {}", rule));
        }
        header.push('\n');
        header
    }

    fn encode_cells(&self, row: &[u8]) -> String {
        let mut seq = RunEncoder::new(70);
        let mut run = 0;
        let mut state = None;
        for &cell in row {
            if state == Some(cell) {
                run += 1;
                continue;
            }
            if let Some(state) = state {
                seq.push_run(run, Self::tag(state));
            }
            state = Some(cell);
            run = 1;
        }
        // trailing dead cells are implied by the header width
        if state == Some(1) {
            seq.push_run(run, 'o');
        }
        seq.end()
    }

    #[inline]
    fn tag(cell: u8) -> char {
        if cell == 1 { 'o' } else { 'b' }
    }

    /// Rejects rows too long to allocate
    fn check_len(len: usize) -> Result<usize> {
        if len > MAX_CELLS {
            return Err(AutomatonError::Decode(format!(
                "{len} cells exceed the limit of {MAX_CELLS}"
            )));
        }
        Ok(len)
    }

    /// Text between run tokens may only be whitespace
    fn check_gap(gap: &str) -> Result<()> {
        match gap.trim() {
            "" => Ok(()),
            junk => Err(AutomatonError::Decode(format!("unexpected text {junk:?}"))),
        }
    }

    fn decode_width(line: &str) -> Option<Result<usize>> {
        let re = Regex::new(r"^\s*x\s*=\s*(\d+)").ok()?;
        let caps = re.captures(line)?;
        Some(
            caps[1]
                .parse::<usize>()
                .map_err(|e| AutomatonError::Decode(format!("bad width: {e}"))),
        )
    }
}
impl Default for RunLengthEncoded {
    fn default() -> Self {
        Self {
            name: None,
            rule: None,
            header: true,
        }
    }
}

impl RowCodec for RunLengthEncoded {
    fn encode(&self, row: &[u8]) -> String {
        format!("{}{}\n", self.encode_header(row.len()), self.encode_cells(row))
    }

    fn decode(&self, value: &str) -> Result<Vec<u8>> {
        let re = Regex::new(r"(\d*)([bo$!])")
            .map_err(|e| AutomatonError::Decode(e.to_string()))?;

        let mut width = None;
        let mut row = Vec::new();
        'lines_loop: for mut line in value.split('\n') {
            if let Some(i) = line.find('#') {
                line = &line[..i];
            }
            if let Some(w) = Self::decode_width(line) {
                width = Some(Self::check_len(w?)?);
                continue;
            }

            let mut last_end = 0;
            for caps in re.captures_iter(line) {
                let token = caps.get(0).map_or(last_end..last_end, |m| m.range());
                Self::check_gap(&line[last_end..token.start])?;
                last_end = token.end;

                let (_, [run_str, state]) = caps.extract();
                let run = match run_str {
                    "" => 1,
                    digits => digits
                        .parse::<usize>()
                        .map_err(|e| AutomatonError::Decode(format!("bad run {digits:?}: {e}")))?,
                };
                let cell = match state {
                    "!" => break 'lines_loop,
                    "o" => 1,
                    "b" => 0,
                    _ => {
                        return Err(AutomatonError::Decode(
                            "multi-line patterns are not rows".to_owned(),
                        ));
                    }
                };
                Self::check_len(row.len().saturating_add(run))?;
                row.extend(std::iter::repeat_n(cell, run));
            }
            Self::check_gap(&line[last_end..])?;
        }

        if let Some(width) = width {
            if row.len() > width {
                return Err(AutomatonError::Decode(format!(
                    "{} cells do not fit in width {width}",
                    row.len()
                )));
            }
            row.resize(width, 0);
        }
        Ok(row)
    }
}

/// Decodes a row written in any of the supported formats
///
/// RLE is recognised by its `!` terminator, digit rows by containing only `0`
/// and `1`, anything else is read as glyphs.
pub fn decode_any(value: &str) -> Result<Vec<u8>> {
    let trimmed = value.trim();
    if trimmed.contains('!') {
        RunLengthEncoded::default().decode(value)
    } else if trimmed.chars().all(|c| c == '0' || c == '1') {
        Digits.decode(trimmed)
    } else {
        Glyphs::default().decode(trimmed)
    }
}
