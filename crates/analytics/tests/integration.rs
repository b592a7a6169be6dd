use std::path::PathBuf;

use salesboard_analytics::config::AnalysisConfig;
use salesboard_analytics::engine::analyze;
use salesboard_analytics::error::{AnalyzeError, ErrorKind, ShapeProblem};
use salesboard_analytics::input::load_sales_json;
use salesboard_analytics::model::{LineItem, Product, SalesData, SellerReport, SellerStat};
use salesboard_analytics::strategy::{AnalysisOptions, DiscountedRevenue, ProfitRankBonus};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn load_fixture(name: &str) -> SalesData {
    let path = fixtures_dir().join(name);
    let json = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()));
    load_sales_json(&json).unwrap()
}

fn load_policy(name: &str) -> AnalysisOptions {
    let toml = std::fs::read_to_string(fixtures_dir().join(name)).unwrap();
    AnalysisConfig::from_toml(&toml).unwrap().to_options().unwrap()
}

fn ids(reports: &[SellerReport]) -> Vec<&str> {
    reports.iter().map(|r| r.seller_id.as_str()).collect()
}

// -------------------------------------------------------------------------
// Standard policy
// -------------------------------------------------------------------------

#[test]
fn standard_policy_full_report() {
    let data = load_fixture("sales.json");
    let reports = analyze(&data, &AnalysisOptions::standard()).unwrap();

    assert_eq!(ids(&reports), vec!["seller_1", "seller_3", "seller_2", "seller_4", "seller_5"]);

    let expected = [
        // (name, revenue, profit, sales_count, bonus)
        ("Alexey Petrov", 4543.89, 1604.59, 6, 240.69),
        ("Dmitry Sokolov", 2338.11, 963.71, 4, 96.37),
        ("Elena Volkova", 2244.13, 858.88, 5, 85.89),
        ("Natalia Morozova", 1377.64, 443.64, 3, 22.18),
        ("Sergey Lebedev", 681.2, 172.8, 2, 0.0),
    ];
    for (report, (name, revenue, profit, sales_count, bonus)) in reports.iter().zip(expected) {
        assert_eq!(report.name, name);
        assert_eq!(report.revenue, revenue, "{} revenue", report.seller_id);
        assert_eq!(report.profit, profit, "{} profit", report.seller_id);
        assert_eq!(report.sales_count, sales_count, "{} sales_count", report.seller_id);
        assert_eq!(report.bonus, bonus, "{} bonus", report.seller_id);
    }
}

#[test]
fn policy_file_matches_standard_options() {
    let data = load_fixture("sales.json");
    let from_file = analyze(&data, &load_policy("standard.policy.toml")).unwrap();
    let built_in = analyze(&data, &AnalysisOptions::standard()).unwrap();
    assert_eq!(from_file, built_in);
}

#[test]
fn top_products_truncated_with_sku_tie_break() {
    let data = load_fixture("sales.json");
    let reports = analyze(&data, &AnalysisOptions::standard()).unwrap();

    let leader = &reports[0];
    let skus: Vec<&str> = leader.top_products.iter().map(|p| p.sku.as_str()).collect();
    assert_eq!(
        skus,
        vec![
            "SKU_002", "SKU_003", "SKU_001", "SKU_007", "SKU_004", "SKU_006", "SKU_011", "SKU_012",
            "SKU_005", "SKU_008",
        ]
    );
    assert_eq!(leader.top_products[0].quantity, 19);
    assert_eq!(leader.top_products[9].quantity, 3);

    let second = &reports[1];
    assert_eq!(second.top_products.len(), 9);
    assert_eq!(second.top_products[0].sku, "SKU_008");
    assert_eq!(second.top_products[1].sku, "SKU_010");
    assert_eq!(second.top_products[0].quantity, second.top_products[1].quantity);
}

#[test]
fn sales_count_matches_record_count() {
    let data = load_fixture("sales.json");
    let reports = analyze(&data, &AnalysisOptions::standard()).unwrap();

    for report in &reports {
        let records = data
            .purchase_records
            .iter()
            .filter(|r| r.seller_id == report.seller_id)
            .count() as u64;
        assert_eq!(report.sales_count, records, "{}", report.seller_id);
    }
    let total: u64 = reports.iter().map(|r| r.sales_count).sum();
    assert_eq!(total, data.purchase_records.len() as u64);
}

// -------------------------------------------------------------------------
// Alternative policies
// -------------------------------------------------------------------------

#[test]
fn gross_margin_policy_reorders_sellers() {
    let data = load_fixture("sales.json");
    let reports = analyze(&data, &load_policy("gross-margin.policy.toml")).unwrap();

    // Without discounts seller_2 overtakes seller_3.
    assert_eq!(ids(&reports), vec!["seller_1", "seller_2", "seller_3", "seller_4", "seller_5"]);
    assert_eq!(reports[0].profit, 1872.56);
    assert_eq!(reports[1].profit, 1022.85);
    assert_eq!(reports[2].profit, 1018.68);
    // Receipt totals are taken as recorded, whatever the revenue policy.
    assert_eq!(reports[0].revenue, 4543.89);

    for report in &reports {
        assert!(report.top_products.len() <= 3);
    }
}

#[test]
fn caller_supplied_strategies() {
    let data = load_fixture("sales.json");
    let options = AnalysisOptions::builder()
        .calculate_revenue(DiscountedRevenue::default())
        .calculate_bonus(|_rank: usize, total: usize, seller: &SellerStat| {
            seller.profit / total as f64
        })
        .top_products_limit(1)
        .build()
        .unwrap();

    let reports = analyze(&data, &options).unwrap();
    assert_eq!(reports[0].bonus, 320.92);
    assert_eq!(reports[0].top_products.len(), 1);
    assert_eq!(reports[0].top_products[0].sku, "SKU_002");
}

// -------------------------------------------------------------------------
// Failure modes
// -------------------------------------------------------------------------

fn mutate_fixture(edit: impl FnOnce(&mut serde_json::Value)) -> String {
    let json = std::fs::read_to_string(fixtures_dir().join("sales.json")).unwrap();
    let mut root: serde_json::Value = serde_json::from_str(&json).unwrap();
    edit(&mut root);
    root.to_string()
}

#[test]
fn empty_purchase_records_is_shape_error() {
    let json = mutate_fixture(|root| root["purchase_records"] = serde_json::json!([]));
    let err = load_sales_json(&json).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InputShape);
    assert!(matches!(
        err,
        AnalyzeError::InputShape { collection: "purchase_records", problem: ShapeProblem::Empty }
    ));
}

#[test]
fn options_without_revenue_strategy_is_config_error() {
    let err = AnalysisOptions::builder()
        .calculate_bonus(ProfitRankBonus::default())
        .build()
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);
}

#[test]
fn unknown_seller_fails_whole_run() {
    let json = mutate_fixture(|root| root["purchase_records"][3]["seller_id"] = "seller_99".into());
    let data = load_sales_json(&json).unwrap();
    let label = data.purchase_records[3].receipt_id.clone().unwrap();

    let err = analyze(&data, &AnalysisOptions::standard()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ReferentialIntegrity);
    assert_eq!(err.to_string(), format!("record '{label}': unknown seller 'seller_99'"));
}

#[test]
fn unknown_product_fails_whole_run() {
    let json = mutate_fixture(|root| root["purchase_records"][0]["items"][0]["sku"] = "SKU_999".into());
    let data = load_sales_json(&json).unwrap();

    let err = analyze(&data, &AnalysisOptions::standard()).unwrap_err();
    assert!(matches!(err, AnalyzeError::UnknownProduct { ref sku, .. } if sku == "SKU_999"));
}

#[test]
fn duplicate_sku_is_shape_error() {
    let json = mutate_fixture(|root| root["products"][1]["sku"] = "SKU_001".into());
    let data = load_sales_json(&json).unwrap();

    let err = analyze(&data, &AnalysisOptions::standard()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InputShape);
    assert!(matches!(err, AnalyzeError::DuplicateKey { collection: "products", .. }));
}

// -------------------------------------------------------------------------
// Small scenarios
// -------------------------------------------------------------------------

fn single_seller_data() -> SalesData {
    serde_json::from_value(serde_json::json!({
        "customers": [{"id": "customer_1"}],
        "sellers": [{"id": "seller_1", "first_name": "Alexey", "last_name": "Petrov"}],
        "products": [{"sku": "SKU1", "purchase_price": 50}],
        "purchase_records": [{
            "seller_id": "seller_1",
            "total_amount": 200,
            "items": [{"sku": "SKU1", "quantity": 2, "sale_price": 100, "discount": 0}]
        }]
    }))
    .unwrap()
}

#[test]
fn single_seller_takes_first_place_bonus() {
    let reports = analyze(&single_seller_data(), &AnalysisOptions::standard()).unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].profit, 100.0);
    assert_eq!(reports[0].bonus, 15.0);
}

#[test]
fn revenue_strategy_receives_product() {
    let options = AnalysisOptions::builder()
        .calculate_revenue(|item: &LineItem, product: &Product| {
            // cost-plus pricing: always 20% over purchase price
            product.purchase_price * 1.2 * item.quantity as f64
        })
        .calculate_bonus(ProfitRankBonus::default())
        .build()
        .unwrap();

    let reports = analyze(&single_seller_data(), &options).unwrap();
    assert_eq!(reports[0].profit, 20.0);
    assert_eq!(reports[0].bonus, 3.0);
}
