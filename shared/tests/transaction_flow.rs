//! Form → update counter → table refetch, with the remote API replaced by an
//! in-memory list that speaks the same JSON.

use shared::{
    Account, Category, FormController, ReferenceData, Transaction, TransactionDraft,
    TransactionTableService, TransactionType, TypeFilter,
};

struct FakeApi {
    accounts: Vec<Account>,
    categories: Vec<Category>,
    stored: Vec<serde_json::Value>,
}

impl FakeApi {
    fn new() -> Self {
        Self {
            accounts: vec![Account {
                id: "a1".to_string(),
                name: "Checking".to_string(),
            }],
            categories: vec![
                Category {
                    id: "c1".to_string(),
                    name: "Salary".to_string(),
                    category_type: TransactionType::Income,
                },
                Category {
                    id: "c2".to_string(),
                    name: "Groceries".to_string(),
                    category_type: TransactionType::Expense,
                },
            ],
            stored: Vec::new(),
        }
    }

    fn create(&mut self, body: serde_json::Value) {
        let mut record = body;
        record["id"] = serde_json::json!(format!("t{}", self.stored.len() + 1));
        let account_id = record["accountId"].as_str().unwrap_or_default().to_string();
        let category_id = record["categoryId"].as_str().unwrap_or_default().to_string();
        if let Some(account) = self.accounts.iter().find(|a| a.id == account_id) {
            record["account"] = serde_json::to_value(account).unwrap();
        }
        if let Some(category) = self.categories.iter().find(|c| c.id == category_id) {
            record["category"] = serde_json::to_value(category).unwrap();
        }
        self.stored.push(record);
    }

    fn list(&self) -> Vec<Transaction> {
        let body = serde_json::to_string(&self.stored).unwrap();
        serde_json::from_str(&body).unwrap()
    }
}

fn submit(
    form: &mut FormController<TransactionDraft>,
    api: &mut FakeApi,
    update: &mut u32,
    fields: &[(&str, &str)],
) -> bool {
    for (field, value) in fields {
        assert!(form.set_field(field, *value), "unknown field {}", field);
    }
    form.submit(|request| {
        api.create(serde_json::to_value(&request).unwrap());
        *update += 1;
    })
    .is_submitted()
}

#[test]
fn test_submissions_refresh_table() {
    let mut api = FakeApi::new();
    let reference = ReferenceData::from_parts(api.accounts.clone(), api.categories.clone());
    let service = TransactionTableService::new();
    let mut form = FormController::<TransactionDraft>::new();
    let mut update = 0u32;

    let salary_category = reference.categories_for(TransactionType::Income)[0].id.as_str();
    let groceries_category = reference.categories_for(TransactionType::Expense)[0].id.as_str();

    assert!(submit(
        &mut form,
        &mut api,
        &mut update,
        &[
            ("type", "income"),
            ("amount", "1200"),
            ("note", "june pay"),
            ("description", "salary for june"),
            ("date", "2023-06-30T09:00:00Z"),
            ("accountId", "a1"),
            ("categoryId", salary_category),
        ],
    ));
    assert!(submit(
        &mut form,
        &mut api,
        &mut update,
        &[
            ("type", "expense"),
            ("amount", "45.10"),
            ("note", "market"),
            ("description", "weekly groceries"),
            ("date", "2023-07-01T18:30:00Z"),
            ("accountId", "a1"),
            ("categoryId", groceries_category),
        ],
    ));
    assert_eq!(update, 2);

    let fetched = api.list();
    let view = service.build_view(&fetched, TypeFilter::All);
    assert_eq!(view.rows.len(), 2);
    assert_eq!(view.rows[0].description, "weekly groceries");
    assert_eq!(view.rows[0].date, "2023-7-1");
    assert_eq!(view.rows[0].account_name, "Checking");
    assert_eq!(view.rows[0].category_name, "Groceries");
    assert_eq!(view.formatted_total, "1245.10");

    let expenses = service.build_view(&fetched, TypeFilter::Only(TransactionType::Expense));
    assert_eq!(expenses.rows.len(), 1);
    assert_eq!(expenses.formatted_total, "45.10");
}

#[test]
fn test_invalid_submission_sends_nothing() {
    let mut api = FakeApi::new();
    let mut form = FormController::<TransactionDraft>::new();
    let mut update = 0u32;

    let submitted = submit(
        &mut form,
        &mut api,
        &mut update,
        &[
            ("type", "expense"),
            ("amount", "250000"),
            ("note", "tv"),
            ("description", "new television"),
            ("date", "2023-07-02"),
            ("accountId", "a1"),
            ("categoryId", "c2"),
        ],
    );

    assert!(!submitted);
    assert_eq!(update, 0);
    assert!(api.stored.is_empty());

    let errors = form.visible_errors();
    assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["amount", "note"]);
    assert_eq!(form.value("description"), "new television");
}
