/// Customer name search tests
///
/// Results are compared as sets; the store gives no ordering guarantee.
mod utils;

use std::collections::BTreeSet;

use lunchly_lib::modules::customer::{Customer, NameQuery};
use lunchly_lib::shared::errors::AppError;
use utils::{db, factories::CustomerFactory};

fn full_names(customers: &[Customer]) -> BTreeSet<String> {
    customers.iter().map(Customer::full_name).collect()
}

fn set(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|n| n.to_string()).collect()
}

/// Substring filter equivalent to the store's LIKE predicate for wildcard-free queries
fn matches_in_memory(query: &NameQuery, customer: &Customer) -> bool {
    match query {
        NameQuery::Single(fragment) => {
            customer.first_name.contains(fragment.as_str())
                || customer.last_name.contains(fragment.as_str())
        }
        NameQuery::Full { first, last } => {
            customer.first_name.contains(first.as_str())
                && customer.last_name.contains(last.as_str())
        }
    }
}

async fn seed(service: &lunchly_lib::modules::customer::CustomerService, names: &[(&str, &str)]) {
    for (first, last) in names {
        CustomerFactory::named(first, last).create(service).await;
    }
}

#[tokio::test]
async fn two_words_match_first_and_last_name() {
    let ctx = db::setup();
    seed(&ctx.service, &[("Jane", "Smith"), ("John", "Smithson")]).await;

    let found = ctx.service.search_by_name("jane smith").await.unwrap();
    assert_eq!(full_names(&found), set(&["Jane Smith"]));
}

#[tokio::test]
async fn one_word_matches_first_or_last_name() {
    let ctx = db::setup();
    seed(
        &ctx.service,
        &[
            ("Jane", "Smith"),
            ("John", "Smithson"),
            ("Smithers", "Burns"),
            ("Smitty", "Jones"),
            ("Ada", "Lovelace"),
        ],
    )
    .await;

    // "Smitty" shares a prefix with "Smith" but does not contain it
    let found = ctx.service.search_by_name("smith").await.unwrap();
    assert_eq!(
        full_names(&found),
        set(&["Jane Smith", "John Smithson", "Smithers Burns"])
    );
}

#[tokio::test]
async fn surrounding_spaces_keep_one_word_mode() {
    let ctx = db::setup();
    seed(&ctx.service, &[("Jane", "Smith"), ("Ada", "Lovelace")]).await;

    let found = ctx.service.search_by_name(" ada ").await.unwrap();
    assert_eq!(full_names(&found), set(&["Ada Lovelace"]));
}

#[tokio::test]
async fn matching_is_case_sensitive_after_first_character() {
    let ctx = db::setup();
    seed(&ctx.service, &[("Jane", "McDonald")]).await;

    assert_eq!(ctx.service.search_by_name("mcdonald").await.unwrap().len(), 0);
    assert_eq!(ctx.service.search_by_name("mcD").await.unwrap().len(), 1);
}

#[tokio::test]
async fn wildcards_in_query_are_not_escaped() {
    let ctx = db::setup();
    seed(&ctx.service, &[("Jane", "Smith"), ("John", "Smyth")]).await;

    // `_` stands for any single character in LIKE
    let found = ctx.service.search_by_name("sm_th").await.unwrap();
    assert_eq!(full_names(&found), set(&["Jane Smith", "John Smyth"]));
}

#[tokio::test]
async fn no_match_is_empty_not_an_error() {
    let ctx = db::setup();
    seed(&ctx.service, &[("Jane", "Smith")]).await;

    assert!(ctx.service.search_by_name("zelda").await.unwrap().is_empty());
}

#[tokio::test]
async fn empty_query_is_rejected() {
    let ctx = db::setup();
    seed(&ctx.service, &[("Jane", "Smith")]).await;

    let err = ctx.service.search_by_name("").await.unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
}

#[tokio::test]
async fn search_has_no_result_cap() {
    let ctx = db::setup();
    for n in 0..25 {
        CustomerFactory::named("Sam", &format!("Walker{}", n))
            .create(&ctx.service)
            .await;
    }

    assert_eq!(ctx.service.search_by_name("walker").await.unwrap().len(), 25);
}

#[tokio::test]
async fn results_equal_in_memory_filter_for_each_query() {
    let ctx = db::setup();
    let people = [
        ("Jane", "Smith"),
        ("John", "Smithson"),
        ("Janet", "Doe"),
        ("Mary", "Jane"),
        ("Bo", "Johnson"),
    ];
    seed(&ctx.service, &people).await;
    let everyone = ctx.service.list_customers().await.unwrap();

    for raw in ["jan", "smith", "jo", "jane smith", "j son", "mary jane", "bo"] {
        let query = NameQuery::parse(raw).unwrap();
        let expected: BTreeSet<String> = everyone
            .iter()
            .filter(|c| matches_in_memory(&query, c))
            .map(Customer::full_name)
            .collect();

        let found = ctx.service.search_by_name(raw).await.unwrap();
        assert_eq!(full_names(&found), expected, "query {:?}", raw);
    }
}
