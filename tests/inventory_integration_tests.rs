use product_inventory_management::adapter::driven::{ConsoleLogger, InMemoryProductRepository};
use product_inventory_management::adapter::LoggingConfig;
use product_inventory_management::application::InventoryService;
use product_inventory_management::domain::error::DomainError;
use product_inventory_management::domain::model::{Category, DiscountCategory, Product};
use product_inventory_management::domain::port::{LogLevel, ProductRepository};
use product_inventory_management::domain::service::DiscountCalculator;
use product_inventory_management::domain::validation::{is_valid_category, is_valid_product};

use std::sync::Arc;

// テスト用ヘルパー関数
fn setup() -> (Arc<InMemoryProductRepository>, InventoryService) {
    let repository = Arc::new(InMemoryProductRepository::new());
    let service = InventoryService::new(
        repository.clone(),
        Arc::new(ConsoleLogger::with_min_level(LogLevel::Warning)),
    );
    (repository, service)
}

fn seed(service: &InventoryService) {
    let products = [
        Product::new("LAP001", "Laptop Gaming", "Elektronik", 15_000_000.0, 10, 5),
        Product::new("MOU001", "Mouse Wireless", "Aksesoris", 150_000.0, 3, 5),
        Product::new("KEY001", "Keyboard Mekanik", "Aksesoris", 650_000.0, 0, 2),
    ];
    for product in &products {
        assert!(service.add_product(product));
    }
}

#[test]
fn test_catalog_lifecycle() {
    let (repository, service) = setup();
    seed(&service);

    assert_eq!(repository.len(), 3);
    assert_eq!(service.find_by_code("LAP001").unwrap().name(), "Laptop Gaming");
    assert_eq!(service.find_by_name("Wireless").len(), 1);
    assert_eq!(service.find_by_category("Aksesoris").len(), 2);

    // 在庫が残っている商品は削除できず、在庫切れの商品は削除できる
    assert!(!service.remove_product("LAP001"));
    assert!(service.remove_product("KEY001"));
    assert!(service.find_by_code("KEY001").is_none());
    assert!(!service.remove_product("KEY001"));
}

#[test]
fn test_stock_transactions_move_products_between_states() {
    let (_, service) = setup();
    seed(&service);

    // 10 → 5: 最小在庫数ちょうどで在庫少
    assert!(service.decrease_stock("LAP001", 5));
    let codes: Vec<String> = service
        .low_stock_products()
        .iter()
        .map(|p| p.code().to_string())
        .collect();
    assert_eq!(codes, vec!["LAP001", "MOU001"]);

    // 5 → 0: 在庫切れ
    assert!(service.decrease_stock("LAP001", 5));
    assert!(!service.decrease_stock("LAP001", 1));
    assert_eq!(service.out_of_stock_products().len(), 2);

    // 入庫で在庫切れから回復
    assert!(service.increase_stock("KEY001", 8));
    let keyboard = service.find_by_code("KEY001").unwrap();
    assert_eq!(keyboard.stock(), 8);
    assert!(keyboard.is_stock_safe());

    assert!(service.update_stock("LAP001", 1));
    assert!(service.find_by_code("LAP001").unwrap().is_stock_low());
}

#[test]
fn test_inactive_products_are_frozen_and_excluded_from_totals() {
    let (repository, service) = setup();
    seed(&service);

    assert_eq!(service.total_stock_units(), 13);
    assert_eq!(
        service.total_inventory_value(),
        15_000_000.0 * 10.0 + 150_000.0 * 3.0
    );

    let mut mouse = repository.find_by_code("MOU001").unwrap();
    mouse.set_active(false);
    assert!(repository.save(&mouse));

    assert!(!service.increase_stock("MOU001", 1));
    assert!(!service.decrease_stock("MOU001", 1));
    // 直接の在庫更新は有効フラグを見ない
    assert!(service.update_stock("MOU001", 4));

    assert_eq!(service.total_stock_units(), 10);
    assert_eq!(service.total_inventory_value(), 150_000_000.0);
}

#[test]
fn test_empty_catalog_totals() {
    let (_, service) = setup();
    assert_eq!(service.total_stock_units(), 0);
    assert_eq!(service.total_inventory_value(), 0.0);
    assert!(service.low_stock_products().is_empty());
    assert!(service.out_of_stock_products().is_empty());
}

#[test]
fn test_snapshot_round_trip_keeps_service_behaviour() {
    let (repository, service) = setup();
    seed(&service);
    assert!(service.decrease_stock("MOU001", 3));

    let json = repository.to_json().unwrap();
    let restored = Arc::new(InMemoryProductRepository::from_json(&json).unwrap());
    let config = LoggingConfig {
        level: LogLevel::Error,
        component: "RestoredInventory".to_string(),
    };
    let restored_service =
        InventoryService::new(restored, Arc::new(ConsoleLogger::from_config(&config)))
            .with_component(config.component.clone());

    assert_eq!(restored_service.out_of_stock_products().len(), 2);
    assert_eq!(restored_service.total_stock_units(), 10);
    assert!(!restored_service.add_product(&Product::new(
        "LAP001",
        "Laptop Lain",
        "Elektronik",
        1.0,
        1,
        0
    )));
}

#[test]
fn test_sale_pricing_with_entity_and_calculator() {
    let (_, service) = setup();
    seed(&service);
    let calculator = DiscountCalculator::new();

    let mut laptop = service.find_by_code("LAP001").unwrap();
    let gross = laptop.line_total(10).unwrap();
    assert_eq!(gross, 150_000_000.0);

    let discount = calculator
        .discount_amount(laptop.price(), 10, "REGULER")
        .unwrap();
    assert!((discount - 22_500_000.0).abs() < 1e-3);
    assert_eq!(
        calculator.classify(discount / gross),
        DiscountCategory::ModerateDiscount
    );

    // エンティティ側の在庫操作は不正な引数でエラーを返す
    assert_eq!(
        laptop.decrease_stock_by(11),
        Err(DomainError::InsufficientStock)
    );
    assert!(laptop.decrease_stock_by(10).is_ok());
    assert!(laptop.is_stock_out());
}

#[test]
fn test_validation_of_entities_used_by_service() {
    let (repository, service) = setup();

    let mut product = Product::new("  NEW01 ", "Monitor 24 inci", "Elektronik", 2_000_000.0, 1, 0);
    assert!(is_valid_product(&product));
    assert!(service.add_product(&product));
    assert!(service.find_by_code("NEW01").is_some());

    product.set_code("NEW02");
    product.set_category("TV");
    assert!(!is_valid_product(&product));
    assert!(!service.add_product(&product));
    assert_eq!(repository.len(), 1);

    assert!(is_valid_category(&Category::new("ELK01", "Elektronik", None)));
}
