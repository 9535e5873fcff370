use super::*;
use crate::git::GitError;

#[test]
fn test_parse_log_record() {
    let record = "0123456789abcdef0123456789abcdef01234567\x1fPratik Naik\x1fFix bug [miloops]\n";
    let commit = Parser::parse_log_record(record).unwrap();

    assert_eq!(commit.id(), "0123456789abcdef0123456789abcdef01234567");
    assert_eq!(commit.author_name(), "Pratik Naik");
    assert_eq!(commit.message(), "Fix bug [miloops]");
    assert!(!commit.is_legacy_import());
}

#[test]
fn test_parse_log_record_multiline_message() {
    let record = "abc\x1fdavid\x1fSubject [Rick Olson]\n\ngit-svn-id: http://svn.rubyonrails.org/rails/trunk@4000 5ecf4fe2\n";
    let commit = Parser::parse_log_record(record).unwrap();

    assert_eq!(
        commit.message(),
        "Subject [Rick Olson]\n\ngit-svn-id: http://svn.rubyonrails.org/rails/trunk@4000 5ecf4fe2"
    );
    assert!(commit.is_legacy_import());
}

#[test]
fn test_parse_log_record_message_with_separator() {
    // A stray unit separator in the message stays in the message
    let record = "abc\x1fdavid\x1fodd\x1fmessage";
    let commit = Parser::parse_log_record(record).unwrap();
    assert_eq!(commit.message(), "odd\x1fmessage");
}

#[test]
fn test_parse_log_record_empty_fields() {
    let record = "abc\x1f\x1f";
    let commit = Parser::parse_log_record(record).unwrap();
    assert_eq!(commit.author_name(), "");
    assert_eq!(commit.message(), "");
}

#[test]
fn test_parse_log_record_too_few_fields() {
    let result = Parser::parse_log_record("abc\x1fdavid");
    assert!(matches!(result, Err(GitError::ParseError(_))));
}

#[test]
fn test_parse_log_record_missing_id() {
    let result = Parser::parse_log_record("\x1fdavid\x1fmessage");
    assert!(matches!(result, Err(GitError::ParseError(_))));
}

#[test]
fn test_parse_log_multiple_records() {
    let output = "aaa\x1falice\x1fFirst\n\x1e\nbbb\x1fbob\x1fSecond\n\nBody\n\x1e\n";
    let commits = Parser::parse_log(output).unwrap();

    assert_eq!(commits.len(), 2);
    assert_eq!(commits[0].id(), "aaa");
    assert_eq!(commits[0].message(), "First");
    assert_eq!(commits[1].author_name(), "bob");
    assert_eq!(commits[1].message(), "Second\n\nBody");
}

#[test]
fn test_parse_log_empty_output() {
    assert!(Parser::parse_log("").unwrap().is_empty());
    assert!(Parser::parse_log("\n").unwrap().is_empty());
}
