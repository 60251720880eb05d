use sqlmeta_core::schema::*;
use pretty_assertions::assert_eq;
use std_util::prelude::*;

struct Customer;
struct Order;
struct Unregistered;

impl Entity for Customer {
    fn schema() -> Model {
        Model::new::<Self>("Customer")
            .field(Field::new("id").key())
            .field(Field::new("name").column("full_name"))
            .field(Field::navigation::<Order>("orders"))
    }
}

impl Entity for Order {
    fn schema() -> Model {
        Model::new::<Self>("Order")
            .table(TableAttr::new("Orders").schema("sales"))
            .field(Field::new("id").key())
            .field(Field::new("customer_id"))
            .field(Field::navigation::<Customer>("customer").foreign_key("customer_id"))
    }
}

fn schema() -> Schema {
    assert_ok!(Schema::builder()
        .register::<Customer>()
        .register::<Order>()
        .build())
}

#[test]
fn assigns_ids_in_registration_order() {
    let schema = schema();

    let customer = assert_ok!(schema.model_of::<Customer>());
    assert_eq!(customer.id, ModelId(0));
    assert_eq!(customer.fields[1].id, ModelId(0).field(1));

    let order = assert_ok!(schema.model_of::<Order>());
    assert_eq!(order.id, ModelId(1));
    assert_eq!(schema.field(ModelId(1).field(1)).name.app_name, "customer_id");
}

#[test]
fn links_navigation_targets() {
    let schema = schema();
    let order = schema.model(ModelId(1));

    let customer = assert_some!(order.field_by_name("customer"));
    let navigation = assert_some!(customer.ty.as_navigation());
    assert_eq!(navigation.target, ModelId(0));

    let navs: Vec<_> = order.navigations_to(ModelId(0)).collect();
    assert_eq!(navs.len(), 1);
}

#[test]
fn storage_name_defaults_to_app_name() {
    let schema = schema();
    let customer = schema.model(ModelId(0));

    assert_eq!(customer.fields[0].name.storage_name(), "id");
    assert_eq!(customer.fields[1].name.storage_name(), "full_name");
}

#[test]
fn table_attr_qualified_name() {
    let schema = schema();
    let table = assert_some!(schema.model(ModelId(1)).table.as_ref());
    assert_eq!(table.qualified_name(), "sales.Orders");
    assert_none!(table.alias);
}

#[test]
fn unknown_type_lookup() {
    let schema = schema();
    let err = assert_err!(schema.model_id::<Unregistered>());
    assert!(err.is_unknown_model());
    assert!(err.to_string().contains("Unregistered"));

    let err = assert_err!(schema.get(ModelId(7)));
    assert!(err.is_unknown_model());
}

#[test]
fn field_lookup_by_name() {
    let schema = schema();
    assert_eq!(
        assert_ok!(schema.field_id::<Order>("customer_id")),
        ModelId(1).field(1)
    );

    let err = assert_err!(schema.field_id::<Customer>("email"));
    assert!(!err.is_unknown_model());
    assert_eq!(err.to_string(), "model `Customer` has no field `email`");

    let err = assert_err!(schema.field_id::<Unregistered>("id"));
    assert!(err.is_unknown_model());
}

impl Entity for Unregistered {
    fn schema() -> Model {
        Model::new::<Self>("Unregistered").field(Field::new("id"))
    }
}

#[test]
fn duplicate_registration() {
    let err = assert_err!(Schema::builder()
        .register::<Customer>()
        .register::<Order>()
        .register::<Customer>()
        .build());
    assert!(err.is_invalid_schema());
    assert_eq!(
        err.to_string(),
        "invalid schema: model `Customer` is registered more than once"
    );
}

#[test]
fn navigation_to_unregistered_model() {
    let err = assert_err!(Schema::builder().register::<Order>().build());
    assert!(err.is_invalid_schema());
    assert!(err.to_string().contains("`Order::customer`"));
}

#[test]
fn foreign_key_must_name_primitive_field() {
    struct Invoice;

    let model = Model::new::<Invoice>("Invoice")
        .field(Field::new("id").key())
        .field(Field::navigation::<Customer>("customer").foreign_key("buyer_id"));

    let err = assert_err!(Schema::builder()
        .register::<Customer>()
        .register::<Order>()
        .model(model)
        .build());
    assert!(err.is_invalid_schema());
    assert_eq!(
        err.to_string(),
        "invalid schema: field `Invoice::customer` names foreign key `buyer_id`, which is not a primitive field of `Invoice`"
    );
}

#[test]
fn foreign_key_on_primitive_field() {
    struct Invoice;

    let model = Model::new::<Invoice>("Invoice")
        .field(Field::new("id").key())
        .field(Field::new("customer_id").foreign_key("customer_id"));

    let err = assert_err!(Schema::builder().model(model).build());
    assert!(err.is_invalid_schema());
}
