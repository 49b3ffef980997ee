use crate::screens::SearchDebounce;

use std::time::Duration;

#[tokio::test]
async fn test_only_last_edit_settles() {
    let debounce = SearchDebounce::new(Duration::from_millis(100));

    let first = debounce.clone();
    let second = debounce.clone();
    let third = debounce.clone();

    let (a, b, c) = tokio::join!(
        async move { first.settle().await },
        async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            second.settle().await
        },
        async move {
            tokio::time::sleep(Duration::from_millis(40)).await;
            third.settle().await
        },
    );

    assert!(!a);
    assert!(!b);
    assert!(c);
}

#[tokio::test]
async fn test_single_edit_settles() {
    let debounce = SearchDebounce::new(Duration::from_millis(10));
    assert!(debounce.settle().await);
}
