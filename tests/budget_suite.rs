use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use tracker_core::ledger::{
    budget_status, BudgetConfig, BudgetPeriod, Category, Transaction, TransactionKind,
};
use uuid::Uuid;

fn expense(amount: f64, category: Category, date: DateTime<Utc>) -> Transaction {
    Transaction {
        id: Uuid::new_v4(),
        kind: TransactionKind::Expense,
        amount,
        category,
        title: "entry".to_string(),
        date,
        notes: None,
        account_id: None,
    }
}

fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
}

#[test]
fn test_monthly_scenario_with_category_limit() {
    let config =
        BudgetConfig::new(100.0, BudgetPeriod::Monthly).with_category_limit(Category::Food, 50.0);
    let transactions = vec![expense(60.0, Category::Food, at(2025, 6, 5, 10))];

    let status = budget_status(&config, &transactions, at(2025, 6, 20, 10));
    assert_eq!(status.total_spent, 60.0);
    assert_eq!(status.remaining, 40.0);
    assert!(!status.overall_exceeded);

    assert_eq!(status.categories.len(), 1);
    let food = &status.categories[0];
    assert_eq!(food.category, Category::Food);
    assert_eq!(food.spent, 60.0);
    assert_eq!(food.limit, 50.0);
    assert!(food.exceeded);
}

#[test]
fn test_remaining_is_never_negative() {
    for (amount, spend) in [(0.0, 10.0), (50.0, 80.0), (100.0, 100.0), (100.0, 250.0)] {
        let config = BudgetConfig::new(amount, BudgetPeriod::Monthly);
        let transactions = vec![expense(spend, Category::Others, at(2025, 6, 5, 10))];
        let status = budget_status(&config, &transactions, at(2025, 6, 20, 10));
        assert!(
            status.remaining >= 0.0,
            "remaining went negative for budget {amount} and spend {spend}"
        );
    }
}

#[test]
fn test_weekly_period_starts_on_monday_even_on_sunday() {
    let config = BudgetConfig::new(100.0, BudgetPeriod::Weekly);
    // 2025-06-08 is a Sunday; Monday the 2nd opened the week.
    let sunday = at(2025, 6, 8, 15);
    let transactions = vec![
        expense(10.0, Category::Food, at(2025, 6, 1, 12)),
        expense(20.0, Category::Food, at(2025, 6, 2, 0)),
        expense(30.0, Category::Food, at(2025, 6, 7, 23)),
    ];

    let status = budget_status(&config, &transactions, sunday);
    assert_eq!(
        status.period_start,
        NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
    );
    assert_eq!(status.total_spent, 50.0);
}

#[test]
fn test_yearly_period_spans_the_calendar_year() {
    let config = BudgetConfig::new(5000.0, BudgetPeriod::Yearly);
    let transactions = vec![
        expense(100.0, Category::Bills, at(2024, 12, 31, 23)),
        expense(200.0, Category::Bills, at(2025, 1, 1, 0)),
        expense(300.0, Category::Bills, at(2025, 7, 1, 12)),
    ];

    let status = budget_status(&config, &transactions, at(2025, 7, 2, 9));
    assert_eq!(
        status.period_start,
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    );
    assert_eq!(status.total_spent, 500.0);
}

#[test]
fn test_period_has_no_upper_bound() {
    // A forward-dated entry inside the period still counts: the period is
    // open-ended at "now".
    let config = BudgetConfig::new(100.0, BudgetPeriod::Monthly);
    let transactions = vec![expense(30.0, Category::Food, at(2025, 6, 28, 10))];
    let status = budget_status(&config, &transactions, at(2025, 6, 10, 10));
    assert_eq!(status.total_spent, 30.0);
}

#[test]
fn test_income_never_counts_as_spend() {
    let config = BudgetConfig::new(100.0, BudgetPeriod::Monthly);
    let mut salary = expense(900.0, Category::Salary, at(2025, 6, 1, 9));
    salary.kind = TransactionKind::Income;
    let transactions = vec![salary, expense(40.0, Category::Food, at(2025, 6, 2, 9))];

    let status = budget_status(&config, &transactions, at(2025, 6, 20, 10));
    assert_eq!(status.total_spent, 40.0);
}

#[test]
fn test_categories_without_spend_are_omitted() {
    let config = BudgetConfig::new(100.0, BudgetPeriod::Monthly)
        .with_category_limit(Category::Food, 50.0)
        .with_category_limit(Category::Transport, 30.0);
    let transactions = vec![expense(10.0, Category::Food, at(2025, 6, 5, 10))];

    let status = budget_status(&config, &transactions, at(2025, 6, 20, 10));
    let listed: Vec<Category> = status.categories.iter().map(|c| c.category).collect();
    assert_eq!(listed, vec![Category::Food]);
}

#[test]
fn test_utilization_ordering_is_stable_for_display() {
    let config = BudgetConfig::new(1000.0, BudgetPeriod::Monthly)
        .with_category_limit(Category::Food, 100.0)
        .with_category_limit(Category::Entertainment, 60.0)
        .with_category_limit(Category::Transport, 80.0);
    let transactions = vec![
        expense(90.0, Category::Food, at(2025, 6, 3, 10)),
        expense(30.0, Category::Entertainment, at(2025, 6, 4, 10)),
        expense(80.0, Category::Transport, at(2025, 6, 5, 10)),
    ];

    let status = budget_status(&config, &transactions, at(2025, 6, 20, 10));
    let order: Vec<Category> = status.categories.iter().map(|c| c.category).collect();
    assert_eq!(
        order,
        vec![Category::Transport, Category::Food, Category::Entertainment]
    );
}
