use super::to_code::{PutStr, PutStrPretty};

pub(crate) fn pushn(buf: &mut String, c: char, n: usize) {
    buf.extend(std::iter::repeat_n(c, n));
}

pub(crate) fn put_str_join<'a, T, I>(iter: I, buf: &mut String, prefix: &str, sep: &str, suffix: &str)
where
    T: PutStr + 'a,
    I: Iterator<Item = &'a T>,
{
    buf.push_str(prefix);
    for (i, item) in iter.enumerate() {
        if i > 0 {
            buf.push_str(sep);
        }
        item.put_str(buf);
    }
    buf.push_str(suffix);
}

pub(crate) fn put_str_pretty_join<'a, T, I>(
    iter: I,
    buf: &mut String,
    prefix: &str,
    sep: &str,
    suffix: &str,
) where
    T: PutStrPretty + 'a,
    I: Iterator<Item = &'a T>,
{
    buf.push_str(prefix);
    for (i, item) in iter.enumerate() {
        if i > 0 {
            buf.push_str(sep);
        }
        item.put_str_pretty(buf);
    }
    buf.push_str(suffix);
}

/// Retrieves the index of the first item whose identifier is `ident`.
pub(crate) fn find_index<'a, T, I, F>(iter: I, ident: &str, mut get_ident: F) -> Option<usize>
where
    T: 'a,
    I: Iterator<Item = &'a T>,
    F: FnMut(&'a T) -> Option<&'a str>,
{
    iter.enumerate()
        .find_map(|(i, item)| (get_ident(item) == Some(ident)).then_some(i))
}

pub(crate) fn put_generics(generics: &[String], buf: &mut String, sep: &str) {
    if !generics.is_empty() {
        buf.push('<');
        for (i, generic) in generics.iter().enumerate() {
            if i > 0 {
                buf.push_str(sep);
            }
            buf.push_str(generic);
        }
        buf.push('>');
    }
}
