use sqlcraft::{
    Column, Conjunction, Delete, Direction, GenericBuilder, Insert, JoinType, Minus,
    PlaceholderAllocator, Query, Select, SqlError, Statement, Table, Union, Update, Value,
};

fn builder() -> GenericBuilder {
    GenericBuilder::new()
}

/// Every `:vN` token in `sql`, in text order.
fn tokens_in_text(sql: &str) -> Vec<usize> {
    sql.split(":v")
        .skip(1)
        .filter_map(|rest| {
            let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
            digits.parse().ok()
        })
        .collect()
}

#[test]
fn select_with_named_columns() {
    let mut select = Select::new("user");
    select.set_columns(["id", "role"]).unwrap();
    assert_eq!(
        builder().write(&select).unwrap(),
        "SELECT user.id, user.role FROM user"
    );
}

#[test]
fn wildcard_alias_is_rejected() {
    let mut column = Column::new("*", "user");
    assert!(matches!(
        column.set_alias("x"),
        Err(SqlError::InvalidAlias { .. })
    ));
    assert_eq!(Column::aliased("id", "user", "x").unwrap().alias(), Some("x"));
}

#[test]
fn invalid_conjunction_and_direction() {
    let mut select = Select::new("user");
    assert!(matches!(
        select.having_op("XOR"),
        Err(SqlError::InvalidConjunction(_))
    ));
    assert!(matches!(
        "UP".parse::<Direction>(),
        Err(SqlError::InvalidDirection(_))
    ));
}

#[test]
fn insert_contract() {
    let err = builder().compile(&Insert::new("user")).unwrap_err();
    assert!(err.is_missing_context());

    let mut insert = Insert::new("user");
    insert.set("id", 1);
    let compiled = builder().compile(&insert).unwrap();
    assert_eq!(compiled.sql(), "INSERT INTO user (user.id) VALUES (:v1)");
    assert_eq!(compiled.params().get(":v1"), Some(&Value::Int(1)));
}

#[test]
fn duplicate_join_is_registered_once() {
    let mut select = Select::new("user");
    select
        .join("news", "id", "author_id", &[], JoinType::Left)
        .unwrap();
    select
        .join("news", "id", "author_id", &["title"], JoinType::Inner)
        .unwrap();
    let joins = select.all_joins();
    assert_eq!(joins.len(), 1);
    assert_eq!(joins[0].join_type(), Some(JoinType::Left));
}

#[test]
fn numbering_follows_text_order_across_nesting() {
    let mut inner = Select::new("role");
    inner.set_columns(["id"]).unwrap();
    inner.where_().equals("name", "admin");

    let mut exists = Select::new("session");
    exists.where_().greater_than("created_at", 1_700_000_000);

    let mut counted = Select::new("news");
    counted.count("*", "");
    counted.where_().equals("draft", false);

    let mut select = Select::new("user");
    select.set_select_as_column(counted, "posts");
    select.set_value_as_column("x", "tag");
    {
        let join = select.left_join("profile", "id", "user_id", &[]).unwrap();
        join.join_condition_mut().equals("visible", 1);
        join.where_().is_not_null("avatar").equals("lang", "en");
    }
    select
        .where_()
        .equals("role_id", inner)
        .exists(exists)
        .sub_where(Conjunction::Or)
        .equals("a", 1)
        .equals("b", 2);
    select.having(Conjunction::And).greater_than("id", 0);
    select.limit(10, 20);

    let mut union = Union::new();
    union.add(select.clone()).add(select);

    let compiled = builder().compile(&union).unwrap();
    let seen = tokens_in_text(compiled.sql());
    let expected: Vec<usize> = (1..=compiled.params().len()).collect();
    assert_eq!(seen, expected);
    assert_eq!(compiled.params().len(), 2 * 11);
}

#[test]
fn repeated_compile_is_identical() {
    let mut select = Select::new("user");
    select
        .left_join("news", "id", "author_id", &["title"])
        .unwrap()
        .order_by("created_at", Direction::Desc);
    select.where_().like("name", "a%").in_list("id", [1, 2, 3]);
    select.limit(0, 5);

    let first = builder().compile(&select).unwrap();
    let second = builder().compile(&select).unwrap();
    assert_eq!(first.sql(), second.sql());
    assert_eq!(first.params(), second.params());
}

#[test]
fn caller_owned_allocator_continues() {
    let mut a = Select::new("a");
    a.where_().equals("x", 1);
    let mut b = Select::new("b");
    b.where_().equals("y", 2);

    let mut placeholders = PlaceholderAllocator::new();
    let first = builder().compile_with(&a, &mut placeholders, false).unwrap();
    let second = builder().compile_with(&b, &mut placeholders, true).unwrap();
    assert_eq!(first, "SELECT a.* FROM a WHERE (a.x = :v1)");
    assert_eq!(second, "SELECT b.* FROM b WHERE (b.y = :v2)");
    assert_eq!(placeholders.params().tokens(), [":v1", ":v2"]);
}

#[test]
fn set_operations_reject_table_and_where() {
    let mut minus = Minus::new(Select::new("a"), Select::new("b"));
    assert!(minus.try_table().unwrap_err().is_unsupported());
    assert!(minus.try_where_mut().unwrap_err().is_unsupported());
    assert_eq!(
        builder().write(&minus).unwrap(),
        "SELECT a.* FROM a\nMINUS\nSELECT b.* FROM b"
    );
}

#[test]
fn statements_work_through_the_enum() {
    let mut statements: Vec<Statement> = vec![
        Select::new("user").into(),
        Update::new("user").into(),
        Delete::new("user").into(),
    ];
    for statement in &mut statements {
        statement.try_where_mut().unwrap().equals("id", 1);
    }
    if let Statement::Update(update) = &mut statements[1] {
        update.set("name", "x");
    }

    let rendered: Vec<String> = statements
        .iter()
        .map(|s| builder().write(s).unwrap())
        .collect();
    assert_eq!(
        rendered,
        [
            "SELECT user.* FROM user WHERE (user.id = :v1)",
            "UPDATE user SET user.name = :v1 WHERE (user.id = :v2)",
            "DELETE FROM user WHERE (user.id = :v1)",
        ]
    );
}

#[test]
fn display_renders_or_reports() {
    let mut delete = Delete::new(Table::new("log").with_schema("audit"));
    delete.limit(100);
    assert_eq!(delete.to_string(), "DELETE FROM audit.log LIMIT :v1");

    let update = Update::new("user");
    assert!(update.to_string().contains("without values"));
}

#[test]
fn literal_and_nested_tree() {
    let mut select = Select::new("user");
    let tree = select.where_();
    tree.as_literal("user.id > 0");
    tree.sub_where(Conjunction::And).is_null("deleted_at");
    assert_eq!(
        builder().write(&select).unwrap(),
        "SELECT user.* FROM user WHERE user.id > 0 AND ((user.deleted_at IS NULL))"
    );
}
