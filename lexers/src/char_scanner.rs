#![deny(warnings)]

use crate::scanner::Scanner;

static DIGITS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];
static ARITH_OPS: &[char] = &['+', '-', '*', '/', '(', ')'];

/*
 * Scanning helpers for char streams. Each scan_* call expects the scanner
 * to start fresh (nothing pending before the cursor) and extracts what it
 * matched, or rewinds and returns None.
 */
impl<I: Iterator<Item = char>> Scanner<I> {
    pub fn extract_string(&mut self) -> String {
        self.extract().into_iter().collect()
    }

    /// Discard any whitespace ahead of the cursor.
    pub fn ignore_ws(&mut self) {
        self.skip_while(|c| c.is_whitespace());
        self.ignore();
    }

    // scan a run of decimal digits, no sign, no fraction
    pub fn scan_digits(&mut self) -> Option<String> {
        if !self.skip_all(DIGITS) {
            return None;
        }
        Some(self.extract_string())
    }

    // single char operators and grouping: + - * / ( )
    pub fn scan_arith_op(&mut self) -> Option<char> {
        let op = self.accept_any(ARITH_OPS)?;
        self.ignore();
        Some(op)
    }
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use crate::scanner::Scanner;

    #[test]
    fn scan_digits() {
        for t in ["0", "7", "100", "8192", "000123"] {
            let result = Scanner::new(t.chars()).scan_digits();
            assert_eq!(Some(t.to_string()), result);
        }
        let mut s = Scanner::new("12-3".chars());
        assert_eq!(s.scan_digits(), Some("12".to_string()));
        assert_eq!(s.scan_digits(), None);
        assert_eq!(s.scan_arith_op(), Some('-'));
        assert_eq!(s.scan_digits(), Some("3".to_string()));
    }

    #[test]
    fn sign_is_not_part_of_a_number() {
        let mut s = Scanner::new("-5".chars());
        assert_eq!(s.scan_digits(), None);
        assert_eq!(s.current(), None);
    }

    #[test]
    fn scan_arith_ops() {
        for t in ["+", "-", "*", "/", "(", ")"] {
            let result = Scanner::new(t.chars()).scan_arith_op();
            assert_eq!(t.chars().next(), result);
        }
        for t in ["%", "^", "!", ",", "a", " "] {
            assert_eq!(Scanner::new(t.chars()).scan_arith_op(), None);
        }
    }

    #[test]
    fn whitespace() {
        let mut s = Scanner::new(" \t\n\u{a0} 9".chars());
        s.ignore_ws();
        assert_eq!(s.scan_digits(), Some("9".to_string()));
        let mut s = Scanner::new("9".chars());
        s.ignore_ws();
        assert_eq!(s.next(), Some('9'));
    }
}
