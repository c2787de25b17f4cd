//! Association builder behavior over the blog fixture schema

mod common;

use std::collections::HashMap;

use serde_json::json;

use common::blog_factories;
use fixtura::prelude::*;

fn builder_for(factories: &FactoryRegistry, table: &str) -> AssociationBuilder {
    AssociationBuilder::new(factories.clone(), table)
}

#[test]
fn get_association_with_correct_association() {
    let factories = blog_factories();
    let builder = builder_for(&factories, "Authors");

    let address = builder.get_association("Address").unwrap();
    assert_eq!(address.target_table, "Addresses");

    let country = builder.get_association("Address.City.Country").unwrap();
    assert_eq!(country.target_table, "Countries");
    assert_eq!(country.kind, AssociationKind::BelongsTo);
}

#[test]
fn get_association_with_incorrect_association() {
    let factories = blog_factories();
    let builder = builder_for(&factories, "Authors");

    let err = builder.get_association("Address.Country").unwrap_err();
    match err {
        AssociationBuilderError::UnknownAssociation { table, segment, .. } => {
            assert_eq!(table, "Addresses");
            assert_eq!(segment, "Country");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn get_factory_from_table_name_seeds_the_factory() {
    let factories = blog_factories();
    let builder = builder_for(&factories, "Authors");

    let data = HashMap::from([("street".to_string(), json!("Foo"))]);
    let factory = builder.get_factory_from_table_name("Address", data).unwrap();

    assert_eq!(factory.table(), "Addresses");
    assert_eq!(factory.times(), 1);
    assert_eq!(factory.attributes()["street"], json!("Foo"));
}

#[test]
fn get_factory_from_table_name_with_unknown_chain() {
    let factories = blog_factories();
    let builder = builder_for(&factories, "Authors");

    assert!(builder
        .get_factory_from_table_name("Address.UnknownAssociation", HashMap::new())
        .is_err());
}

#[test]
fn get_factory_from_table_name_expands_repetition_counts() {
    let factories = blog_factories();
    let builder = builder_for(&factories, "Authors");

    let factory = builder
        .get_factory_from_table_name("Articles[10]", HashMap::new())
        .unwrap();

    assert_eq!(factory.table(), "Articles");
    assert_eq!(factory.times(), 10);
}

#[test]
fn get_associated_factory_with_no_depth() {
    let factories = blog_factories();
    let builder = builder_for(&factories, "Authors");

    let factory = builder
        .get_associated_factory("Address", HashMap::new())
        .unwrap();
    assert_eq!(factory.table(), "Addresses");
}

#[test]
fn get_associated_factory_seeds_data() {
    let factories = blog_factories();
    let builder = builder_for(&factories, "Articles");

    let data = HashMap::from([("amount".to_string(), json!(123))]);
    let factory = builder.get_associated_factory("Bills", data).unwrap();

    assert_eq!(factory.table(), "Bills");
    assert_eq!(factory.attributes()["amount"], json!(123));
}

#[test]
fn validate_to_one_association_passes_for_to_many() {
    let factories = blog_factories();
    let builder = builder_for(&factories, "Authors");

    let articles = factories.make("Articles").unwrap().with_times(2);
    assert!(builder
        .validate_to_one_association("Articles", &articles)
        .unwrap());
}

#[test]
fn validate_to_one_association_fails_for_multi_record_factory() {
    let factories = blog_factories();
    let builder = builder_for(&factories, "Authors");

    let addresses = factories.make("Addresses").unwrap().with_times(2);
    let err = builder
        .validate_to_one_association("Address", &addresses)
        .unwrap_err();

    assert!(matches!(
        err,
        AssociationBuilderError::ToOneWithManyRecords { times: 2, .. }
    ));
}

#[test]
fn remove_brackets_strips_every_group() {
    let factories = blog_factories();
    let builder = builder_for(&factories, "Authors");

    assert_eq!(
        builder.remove_brackets("Authors[10].Address.City[10]"),
        "Authors.Address.City"
    );
}

#[test]
fn times_between_brackets_without_brackets() {
    let factories = blog_factories();
    let builder = builder_for(&factories, "Authors");

    assert_eq!(builder.times_between_brackets("Authors").unwrap(), None);
}

#[test]
fn times_between_brackets_with_one_group() {
    let factories = blog_factories();
    let builder = builder_for(&factories, "Authors");

    assert_eq!(
        builder.times_between_brackets("Authors[10]").unwrap(),
        Some(10)
    );
}

#[test]
fn times_between_brackets_with_empty_brackets() {
    let factories = blog_factories();
    let builder = builder_for(&factories, "Authors");

    assert!(matches!(
        builder.times_between_brackets("Authors[]"),
        Err(AssociationBuilderError::EmptyBrackets(_))
    ));
}

#[test]
fn times_between_brackets_with_two_groups() {
    let factories = blog_factories();
    let builder = builder_for(&factories, "Authors");

    assert!(matches!(
        builder.times_between_brackets("Authors[1][2]"),
        Err(AssociationBuilderError::MultipleBracketGroups(_))
    ));
}

#[test]
fn collect_associated_factory_registers_the_path() {
    let factories = blog_factories();
    let mut builder = builder_for(&factories, "Cities");

    let country = factories.make("Countries").unwrap();
    builder.collect_associated_factory("Country", country).unwrap();

    assert_eq!(builder.associated(), ["Country"]);
}

#[test]
fn drop_association_empties_the_subtree() {
    let factories = blog_factories();
    let mut builder = builder_for(&factories, "Addresses");
    builder.set_associated(vec!["City".to_string(), "City.Country".to_string()]);

    builder.drop_association("City");
    assert!(builder.associated().is_empty());
}

#[test]
fn drop_association_is_exact_no_pluralization() {
    let factories = blog_factories();
    let mut builder = builder_for(&factories, "Authors");
    builder.set_associated(vec!["Authors".to_string()]);

    builder.drop_association("Author");
    assert_eq!(builder.associated(), ["Authors"]);
}

#[test]
fn drop_association_keeps_the_parent_path() {
    let factories = blog_factories();
    let mut builder = builder_for(&factories, "Addresses");
    builder.set_associated(vec!["City".to_string(), "City.Country".to_string()]);

    builder.drop_association("City.Country");
    assert_eq!(builder.associated(), ["City"]);
}
