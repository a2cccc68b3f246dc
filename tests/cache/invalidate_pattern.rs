use super::*;

/// Expect only keys under the prefix to be removed
#[tokio::test]
async fn removes_keys_under_prefix() -> Result<(), TestError> {
    let (redis, cache) = setup().await?;
    for suffix in ["top_matches_image", "top_matches_image:1", "top_matches_image:2"] {
        cache.set_bytes(&redis.key(suffix), b"png", None).await.unwrap();
    }
    let table = redis.key("table_image:PremierLeague");
    cache.set_bytes(&table, b"png", None).await.unwrap();

    let removed = cache
        .invalidate_pattern(&redis.key("top_matches_image"))
        .await
        .unwrap();

    assert_eq!(removed, 3);
    assert!(cache.get_bytes(&table).await.unwrap().is_some());

    Ok(())
}

/// Expect glob characters in the prefix to match literally
#[tokio::test]
async fn treats_prefix_literally() -> Result<(), TestError> {
    let (redis, cache) = setup().await?;
    let bracketed = redis.key("table_image:[A]1");
    let plain = redis.key("table_image:A1");
    cache.set_bytes(&bracketed, b"png", None).await.unwrap();
    cache.set_bytes(&plain, b"png", None).await.unwrap();

    let removed = cache
        .invalidate_pattern(&redis.key("table_image:[A]"))
        .await
        .unwrap();

    assert_eq!(removed, 1);
    assert_eq!(cache.get_bytes(&bracketed).await.unwrap(), None);
    assert!(cache.get_bytes(&plain).await.unwrap().is_some());

    Ok(())
}

/// Expect keys spanning several SCAN batches to all be removed
#[tokio::test]
async fn removes_keys_across_scan_batches() -> Result<(), TestError> {
    let (redis, cache) = setup().await?;
    for page in 0..1200 {
        cache
            .set_bytes(&redis.key(&format!("all_matches_image:{}", page)), b"png", None)
            .await
            .unwrap();
    }

    let removed = cache
        .invalidate_pattern(&redis.key("all_matches_image"))
        .await
        .unwrap();

    assert_eq!(removed, 1200);

    Ok(())
}

/// Expect zero when nothing matches
#[tokio::test]
async fn returns_zero_without_matches() -> Result<(), TestError> {
    let (redis, cache) = setup().await?;

    let removed = cache
        .invalidate_pattern(&redis.key("table_image"))
        .await
        .unwrap();

    assert_eq!(removed, 0);

    Ok(())
}
