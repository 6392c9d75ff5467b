use super::hot::HotCache;
use super::pair::PairCache;
use crate::pair::WordPair;
use crate::storage::{CacheEntry, MemoryPairStore, SqlitePairStore, StorageError};
use crate::validation::GenerationResult;

fn pair(a: &str, b: &str) -> WordPair {
    WordPair::new(a, b).expect("valid pair")
}

fn accepted(result: &str, emoji: &str) -> GenerationResult {
    GenerationResult {
        result: result.to_string(),
        emoji: emoji.to_string(),
    }
}

fn memory_cache() -> (PairCache<MemoryPairStore>, MemoryPairStore) {
    let store = MemoryPairStore::new();
    (PairCache::new(HotCache::new(), store.clone()), store)
}

#[tokio::test]
async fn test_lookup_empty_store_misses() {
    let (cache, store) = memory_cache();

    let found = cache.lookup(&pair("Eau", "Feu")).await.expect("lookup");

    assert!(found.is_none());
    assert_eq!(store.reads(), 2, "both orders must be probed");
}

#[tokio::test]
async fn test_lookup_finds_stored_order() {
    let (cache, store) = memory_cache();
    store.insert(CacheEntry::new("Eau", "Feu", "Vapeur", "💨"));

    let found = cache
        .lookup(&pair("Eau", "Feu"))
        .await
        .expect("lookup")
        .expect("hit");

    assert_eq!(found.result, "Vapeur");
    assert_eq!(store.reads(), 1);
}

#[tokio::test]
async fn test_lookup_finds_reverse_order() {
    let (cache, store) = memory_cache();
    store.insert(CacheEntry::new("Feu", "Eau", "Vapeur", "💨"));

    let found = cache
        .lookup(&pair("Eau", "Feu"))
        .await
        .expect("lookup")
        .expect("hit");

    assert_eq!(found.first_word, "Feu");
    assert_eq!(found.second_word, "Eau");
    assert_eq!(store.reads(), 2);
}

#[tokio::test]
async fn test_lookup_fills_hot_tier() {
    let (cache, store) = memory_cache();
    store.insert(CacheEntry::new("Terre", "Air", "Poussière", "🌪️"));

    cache.lookup(&pair("Terre", "Air")).await.expect("lookup");
    let reads_after_first = store.reads();

    let again = cache
        .lookup(&pair("Air", "Terre"))
        .await
        .expect("lookup")
        .expect("hit");

    assert_eq!(again.result, "Poussière");
    assert_eq!(store.reads(), reads_after_first, "served from hot tier");
}

#[tokio::test]
async fn test_store_result_appends_in_pair_order() {
    let (cache, store) = memory_cache();

    let entry = cache
        .store_result(&pair("feu", "terre"), &accepted("Lave", "🌋"))
        .await
        .expect("store");

    assert_eq!(entry, CacheEntry::new("Feu", "Terre", "Lave", "🌋"));
    assert_eq!(store.rows(), vec![entry.clone()]);
    assert!(cache.hot().contains(&pair("Terre", "Feu")));
}

#[tokio::test]
async fn test_store_then_lookup_both_orders() {
    let (writer, store) = memory_cache();
    writer
        .store_result(&pair("Eau", "Air"), &accepted("Nuage", "☁️"))
        .await
        .expect("store");

    let cache = PairCache::new(HotCache::new(), store);

    let ab = cache.lookup(&pair("Eau", "Air")).await.expect("lookup");
    let ba = cache.lookup(&pair("Air", "Eau")).await.expect("lookup");

    assert_eq!(ab, ba);
    assert_eq!(ab.expect("hit").result, "Nuage");
}

#[tokio::test]
async fn test_lookup_propagates_read_failure() {
    let (cache, store) = memory_cache();
    store.set_fail_reads(true);

    let err = cache.lookup(&pair("Eau", "Feu")).await.unwrap_err();
    assert!(matches!(err, StorageError::Io(_)));
}

#[tokio::test]
async fn test_store_failure_leaves_hot_tier_empty() {
    let (cache, store) = memory_cache();
    store.set_fail_writes(true);

    let result = cache
        .store_result(&pair("Eau", "Feu"), &accepted("Vapeur", "💨"))
        .await;

    assert!(result.is_err());
    assert!(!cache.hot().contains(&pair("Eau", "Feu")));
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_is_ready_follows_store() {
    let (cache, store) = memory_cache();
    assert!(cache.is_ready().await);

    store.set_fail_reads(true);
    assert!(!cache.is_ready().await);
}

#[tokio::test]
async fn test_sqlite_backed_cache_reverse_lookup() {
    let store = SqlitePairStore::open_in_memory().expect("open");
    let cache = PairCache::new(HotCache::new(), store.clone());

    cache
        .store_result(&pair("Eau", "Terre"), &accepted("Boue", "🟤"))
        .await
        .expect("store");

    let fresh = PairCache::new(HotCache::new(), store);
    let found = fresh
        .lookup(&pair("Terre", "Eau"))
        .await
        .expect("lookup")
        .expect("hit");

    assert_eq!(found, CacheEntry::new("Eau", "Terre", "Boue", "🟤"));
}
