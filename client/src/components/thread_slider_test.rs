use super::*;

#[test]
fn reads_thread_param() {
    assert_eq!(slider_thread_id("?thread=t1"), Some("t1".to_owned()));
    assert_eq!(slider_thread_id("?m=2&thread=t9"), Some("t9".to_owned()));
    assert_eq!(slider_thread_id("thread=t1"), Some("t1".to_owned()));
}

#[test]
fn ignores_missing_or_empty_thread_param() {
    assert_eq!(slider_thread_id(""), None);
    assert_eq!(slider_thread_id("?thread="), None);
    assert_eq!(slider_thread_id("?threads=t1"), None);
}
