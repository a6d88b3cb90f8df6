use pretty_assertions::assert_eq;
use resumate_engine::sanitize_file_name;

#[test]
fn plain_names_pass_through() {
    assert_eq!(
        sanitize_file_name("Optimized_Resume_3f2a.docx"),
        "Optimized_Resume_3f2a.docx"
    );
    assert_eq!(sanitize_file_name("Cover Letter.docx"), "Cover Letter.docx");
}

#[test]
fn directory_components_are_dropped() {
    assert_eq!(sanitize_file_name("../../etc/passwd"), "passwd");
    assert_eq!(sanitize_file_name(r"..\..\boot.ini"), "boot.ini");
    assert_eq!(sanitize_file_name("/abs/path/r.docx"), "r.docx");
}

#[test]
fn degenerate_names_get_a_placeholder() {
    assert_eq!(sanitize_file_name(""), "document");
    assert_eq!(sanitize_file_name(".."), "document");
    assert_eq!(sanitize_file_name("dir/"), "document");
}

#[test]
fn forbidden_characters_are_replaced_and_collapsed() {
    assert_eq!(sanitize_file_name("a:*?b.docx"), "a_b.docx");
    assert_eq!(sanitize_file_name("line\nbreak.docx"), "line_break.docx");
}

#[test]
fn reserved_windows_names_are_escaped() {
    assert_eq!(sanitize_file_name("CON.docx"), "_CON.docx");
    assert_eq!(sanitize_file_name("lpt1"), "_lpt1");
}

#[test]
fn long_names_are_truncated_on_char_boundaries() {
    let name = "é".repeat(300);
    let sanitized = sanitize_file_name(&name);
    assert_eq!(sanitized.chars().count(), 120);
}
