#![allow(dead_code)]

use sqlmeta::schema::{ComputedColumn, Field, Model, TableAttr};
use sqlmeta::{Config, Entity, Resolvers, Schema};
use std_util::prelude::*;

pub struct User;
pub struct Address;
pub struct Customer;
pub struct Order;
pub struct OrderLine;
pub struct Shipment;
pub struct Invoice;
pub struct AuditEntry;
pub struct UserSummary;
pub struct Unregistered;

impl Entity for User {
    fn schema() -> Model {
        Model::new::<Self>("User")
            .table(TableAttr::new("Users").schema("dbo"))
            .field(Field::new("id").key())
            .field(Field::new("name"))
            .field(Field::new("email").column("email_address"))
            .field(Field::new("address_id"))
    }
}

impl Entity for Address {
    fn schema() -> Model {
        Model::new::<Self>("Address")
            .table(TableAttr::new("Addresses").alias("a"))
            .field(Field::new("id").key())
            .field(Field::new("street"))
    }
}

/// No key annotation; keyed by its `id` field.
impl Entity for Customer {
    fn schema() -> Model {
        Model::new::<Self>("Customer")
            .field(Field::new("Id"))
            .field(Field::new("name"))
            .field(Field::navigation::<Order>("orders"))
    }
}

impl Entity for Order {
    fn schema() -> Model {
        Model::new::<Self>("Order")
            .field(Field::new("id").key())
            .field(Field::new("customer_id"))
            .field(
                Field::new("total")
                    .column("order_total")
                    .computed(ComputedColumn::new("price * quantity").alias("x")),
            )
            .field(Field::new("notes").not_mapped())
            .field(Field::navigation::<Customer>("customer").foreign_key("customer_id"))
    }
}

impl Entity for OrderLine {
    fn schema() -> Model {
        Model::new::<Self>("OrderLine")
            .field(Field::new("order_id").key())
            .field(Field::new("product_id").key())
            .field(Field::new("quantity"))
    }
}

impl Entity for Shipment {
    fn schema() -> Model {
        Model::new::<Self>("Shipment")
            .field(Field::new("id").key())
            .field(Field::new("order_line_id"))
    }
}

/// References its customer through an annotated navigation only.
impl Entity for Invoice {
    fn schema() -> Model {
        Model::new::<Self>("Invoice")
            .field(Field::new("id").key())
            .field(Field::new("buyer"))
            .field(Field::navigation::<Customer>("customer").foreign_key("buyer"))
    }
}

impl Entity for AuditEntry {
    fn schema() -> Model {
        Model::new::<Self>("AuditEntry").field(Field::new("message"))
    }
}

impl Entity for UserSummary {
    fn schema() -> Model {
        Model::new::<Self>("UserSummary")
            .synthetic()
            .field(Field::new("id").key())
            .field(Field::new("name"))
    }
}

impl Entity for Unregistered {
    fn schema() -> Model {
        Model::new::<Self>("Unregistered").field(Field::new("id").key())
    }
}

pub fn schema() -> Schema {
    assert_ok!(Schema::builder()
        .register::<User>()
        .register::<Address>()
        .register::<Customer>()
        .register::<Order>()
        .register::<OrderLine>()
        .register::<Shipment>()
        .register::<Invoice>()
        .register::<AuditEntry>()
        .register::<UserSummary>()
        .build())
}

pub fn resolvers() -> Resolvers {
    resolvers_with(Config::default())
}

pub fn resolvers_with(config: Config) -> Resolvers {
    let _ = env_logger::builder().is_test(true).try_init();
    Resolvers::new(schema(), config)
}
