//! Line-by-line conversion of a byte stream

use std::io::{self, BufRead, Write};

use zenhan_engine::{Converter, Direction};

/// Convert `reader` into `writer` one line at a time.
///
/// Line terminators are converted along with the line, so `\r\n` and a missing
/// final newline come out exactly as they went in.
pub fn convert_stream<R: BufRead, W: Write>(
    converter: &Converter<'_>,
    direction: Direction,
    mut reader: R,
    mut writer: W,
) -> io::Result<()> {
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        write!(writer, "{}", converter.convert(&line, direction))?;
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str, direction: Direction) -> String {
        let mut output = Vec::new();
        convert_stream(
            &Converter::default(),
            direction,
            Cursor::new(input.as_bytes()),
            &mut output,
        )
        .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_crlf_preserved_without_trailing_newline() {
        assert_eq!(run("ＡＢ\r\nｶﾞ", Direction::Narrow), "AB\r\nｶﾞ");
        assert_eq!(run("AB\r\nｶﾞ", Direction::Widen), "ＡＢ\r\nガ");
    }

    #[test]
    fn test_trailing_newline_kept() {
        assert_eq!(run("ﾊﾞｰﾄ\n", Direction::Widen), "バート\n");
        assert_eq!(run("バート\n\n", Direction::Narrow), "ﾊﾞｰﾄ\n\n");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(run("", Direction::Narrow), "");
    }
}
