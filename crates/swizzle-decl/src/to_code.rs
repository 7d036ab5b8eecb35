pub(crate) const TAB_SIZE: usize = 4;

/// Writes declaration text with as little white space as possible.
pub trait PutStr {
    fn put_ident(&self, buf: &mut String);

    fn put_str(&self, buf: &mut String);

    fn to_code(&self) -> String {
        let mut buf = String::new();
        self.put_str(&mut buf);
        buf
    }
}

/// Writes declaration text for humans.
///
/// Once white space is removed, the result must be the same as
/// [`PutStr::put_str`].
pub trait PutStrPretty: PutStr {
    fn put_str_pretty(&self, buf: &mut String) {
        self.put_str(buf)
    }

    fn to_pretty_code(&self) -> String {
        let mut buf = String::new();
        self.put_str_pretty(&mut buf);
        buf
    }
}
