use sqlcraft::{
    Builder, BuilderConfig, Dialect, DialectKind, GenericBuilder, KeywordFormatter, MySqlBuilder,
    Select, SqlError, SqlFormatter, Table,
};

const MYSQL_CONFIG: &str = r#"
dialect = "mysql"
log_sql = true
max_logged_sql_length = 32

[format]
indent = 2
"#;

fn sample() -> Select {
    let mut select = Select::new(Table::new("order").with_alias("o"));
    select.set_columns([("total", "amount")]).unwrap();
    select
        .inner_join("customer", "customer_id", "id", &["name"])
        .unwrap();
    select.where_().greater_than("amount", 100);
    select
}

#[test]
fn dialect_changes_only_identifiers() {
    let select = sample();
    let generic = GenericBuilder::new().compile(&select).unwrap();
    let mysql = MySqlBuilder::new().compile(&select).unwrap();

    assert_eq!(
        generic.sql(),
        "SELECT o.amount AS total, customer.name FROM order AS o \
         INNER JOIN customer ON (customer.id = o.customer_id) WHERE (o.amount > :v1)"
    );
    assert_eq!(
        mysql.sql(),
        "SELECT `o`.`amount` AS `total`, `customer`.`name` FROM `order` AS `o` \
         INNER JOIN `customer` ON (`customer`.`id` = `o`.`customer_id`) WHERE (`o`.`amount` > :v1)"
    );
    assert_eq!(generic.params(), mysql.params());
}

#[test]
fn builder_from_toml() {
    let config = BuilderConfig::from_toml_str(MYSQL_CONFIG).unwrap();
    let builder = Builder::<DialectKind>::from_config(config);

    assert_eq!(builder.dialect().name(), "mysql");
    assert_eq!(builder.config().max_logged_sql_length, Some(32));

    let pretty = builder.write_formatted(&sample()).unwrap();
    assert_eq!(
        pretty,
        "SELECT `o`.`amount` AS `total`, `customer`.`name`\n\
         FROM `order` AS `o`\n\
         INNER JOIN `customer` ON (`customer`.`id` = `o`.`customer_id`)\n\
         WHERE (`o`.`amount` > :v1)"
    );
}

#[test]
fn malformed_toml_is_a_config_error() {
    let err = BuilderConfig::from_toml_str("dialect = ").unwrap_err();
    assert!(matches!(err, SqlError::Config(_)));
}

#[test]
fn compiled_can_be_formatted_separately() {
    let compiled = GenericBuilder::new().compile(&sample()).unwrap();
    let formatter = KeywordFormatter::new(4);
    assert_eq!(
        compiled.formatted(&formatter),
        formatter.format(compiled.sql())
    );
    assert!(compiled.formatted(&formatter).contains("\nWHERE "));
}
