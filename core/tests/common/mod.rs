use text_diff::Diff;

pub fn eq(text: &str) -> Diff {
    Diff::Equal(text.to_string())
}

pub fn ins(text: &str) -> Diff {
    Diff::Insert(text.to_string())
}

pub fn del(text: &str) -> Diff {
    Diff::Delete(text.to_string())
}
