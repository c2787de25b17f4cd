//! Shared blog fixture schema for integration tests
//!
//! A small publishing domain: authors live at an address whose city belongs
//! to a country, articles are written by many authors (also reachable under
//! the `ExclusivePremiumAuthors` alias), and each article has bills issued
//! to a customer.

use fixtura::prelude::*;

pub fn blog_factories() -> FactoryRegistry {
    let schema = TableRegistry::new();

    schema
        .register(
            TableDef::new("Authors")
                .belongs_to("Address", "Addresses")
                .belongs_to_many("Articles", "Articles"),
        )
        .unwrap();
    schema
        .register(
            TableDef::new("Addresses")
                .belongs_to("City", "Cities")
                .has_many("Authors", "Authors"),
        )
        .unwrap();
    schema
        .register(
            TableDef::new("Cities")
                .belongs_to("Country", "Countries")
                .has_many("Addresses", "Addresses"),
        )
        .unwrap();
    schema
        .register(TableDef::new("Countries").has_many("Cities", "Cities"))
        .unwrap();
    schema
        .register(
            TableDef::new("Articles")
                .belongs_to_many("Authors", "Authors")
                .belongs_to_many("ExclusivePremiumAuthors", "Authors")
                .has_many("Bills", "Bills"),
        )
        .unwrap();
    schema
        .register(
            TableDef::new("Bills")
                .belongs_to("Article", "Articles")
                .belongs_to("Customer", "Customers"),
        )
        .unwrap();
    schema
        .register(TableDef::new("Customers").has_many("Bills", "Bills"))
        .unwrap();

    let factories = FactoryRegistry::new(schema);
    factories.define("Authors", |factory| factory.with("Address"));
    factories.define("Addresses", |factory| factory.with("City"));
    factories.define("Cities", |factory| factory.with("Country"));
    factories.define("Articles", |factory| factory.with("Authors"));
    factories.define("Bills", |factory| factory.with("Article")?.with("Customer"));

    factories
}
