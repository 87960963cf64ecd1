use actor_framework::ActorClient;
use market_backend::lifecycle::MarketSystem;
use market_backend::model::{
    OrderCreate, OrderStatus, ProduceCreate, ProduceId, VendorCreate, VendorId, VendorUpdate,
};
use market_backend::order_actor::OrderError;
use market_backend::produce_actor::ProduceError;
use market_backend::vendor_actor::VendorError;

fn vendor(name: &str, phone: &str) -> VendorCreate {
    VendorCreate {
        name: name.into(),
        market_location: "North Market".into(),
        phone: phone.into(),
    }
}

fn produce(name: &str, quantity_kg: f64, price_per_kg: f64) -> ProduceCreate {
    ProduceCreate {
        name: name.into(),
        quantity_kg,
        price_per_kg,
        category: "Vegetable".into(),
        is_available: true,
    }
}

fn order(produce_id: ProduceId, quantity_kg: f64) -> OrderCreate {
    OrderCreate {
        produce_id,
        buyer_name: "Grace".into(),
        buyer_phone: "555-0142".into(),
        quantity_kg,
        delivery_area: "Riverside".into(),
    }
}

/// Full end-to-end test with all real actors.
#[tokio::test]
async fn test_full_market_system_integration() {
    let system = MarketSystem::default();

    let vendor_id = system
        .vendor_client
        .create_vendor(vendor("Ada", "555-0100"))
        .await
        .expect("Failed to create vendor");
    assert_eq!(vendor_id, VendorId(1));

    // Duplicate phone is rejected and the store is unchanged
    let duplicate = system
        .vendor_client
        .create_vendor(vendor("Someone Else", "555-0100"))
        .await;
    assert!(matches!(duplicate, Err(VendorError::PhoneTaken(_))));
    assert_eq!(system.vendor_client.list().await.unwrap().len(), 1);

    let produce_id = system
        .produce_client
        .add_produce(vendor_id, produce("Tomato", 10.0, 2.5))
        .await
        .expect("Failed to add produce");

    // Unknown vendor
    let orphan = system
        .produce_client
        .add_produce(VendorId(7), produce("Kale", 1.0, 1.0))
        .await;
    assert_eq!(orphan, Err(ProduceError::VendorMissing(VendorId(7))));

    let order_id = system
        .order_client
        .place_order(order(produce_id, 4.0))
        .await
        .expect("Failed to place order");
    let placed = system.order_client.get(order_id).await.unwrap().unwrap();
    assert_eq!(placed.produce_name, "Tomato");
    assert_eq!(placed.total_price, 10.0);

    let stock = system.produce_client.get(produce_id).await.unwrap().unwrap();
    assert_eq!(stock.quantity_kg, 6.0, "Stock should drop by the ordered quantity");

    // Too large: fails and changes nothing
    let large = system.order_client.place_order(order(produce_id, 7.0)).await;
    assert!(matches!(large, Err(OrderError::InsufficientStock(_))));
    let stock = system.produce_client.get(produce_id).await.unwrap().unwrap();
    assert_eq!(stock.quantity_kg, 6.0);
    assert_eq!(system.order_client.list().await.unwrap().len(), 1);

    let missing = system
        .order_client
        .place_order(order(ProduceId(42), 1.0))
        .await;
    assert!(matches!(missing, Err(OrderError::ProduceMissing(_))));

    let confirmed = system
        .order_client
        .advance_status(order_id, OrderStatus::Confirmed)
        .await
        .unwrap();
    assert_eq!(confirmed.status, OrderStatus::Confirmed);

    system.shutdown().await.expect("Failed to shutdown system");
}

#[tokio::test]
async fn vendor_update_and_delete_do_not_cascade() {
    let system = MarketSystem::new(4);

    let id = system
        .vendor_client
        .create_vendor(vendor("Ada", "555-0100"))
        .await
        .unwrap();
    let before = system.vendor_client.get(id).await.unwrap().unwrap();

    let renamed = system
        .vendor_client
        .update_vendor(
            id,
            VendorUpdate {
                name: Some("Ada Lovelace".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(renamed.name, "Ada Lovelace");
    assert_eq!(renamed.phone, before.phone);
    assert_eq!(renamed.market_location, before.market_location);
    assert!(renamed.updated_at > before.updated_at);

    let produce_id = system
        .produce_client
        .add_produce(id, produce("Tomato", 10.0, 2.5))
        .await
        .unwrap();

    system.vendor_client.delete(id).await.unwrap();
    assert!(matches!(
        system.vendor_client.delete(id).await,
        Err(VendorError::NotFound(_))
    ));

    // Produce of a deleted vendor stays listed under the old vendor id
    let item = system.produce_client.get(produce_id).await.unwrap().unwrap();
    assert_eq!(item.vendor_id, id);

    // Ids are never reused after deletion
    let next = system
        .vendor_client
        .create_vendor(vendor("Grace", "555-0199"))
        .await
        .unwrap();
    assert_eq!(next, VendorId(2));

    system.shutdown().await.unwrap();
}

/// Concurrent orders against limited stock never oversell.
#[tokio::test]
async fn test_concurrent_orders() {
    let system = MarketSystem::new(4);

    let vendor_id = system
        .vendor_client
        .create_vendor(vendor("Bob", "555-0111"))
        .await
        .unwrap();
    let produce_id = system
        .produce_client
        .add_produce(vendor_id, produce("Limited Apples", 20.0, 3.0))
        .await
        .unwrap();

    let mut handles = vec![];
    for _ in 0..15 {
        let order_client = system.order_client.clone();
        handles.push(tokio::spawn(async move {
            order_client.place_order(order(produce_id, 2.0)).await
        }));
    }

    let mut successful = 0;
    let mut failed = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => successful += 1,
            Err(OrderError::InsufficientStock(_)) => failed += 1,
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    // 20 kg / 2 kg per order
    assert_eq!(successful, 10, "Expected exactly 10 successful orders");
    assert_eq!(failed, 5);

    let final_stock = system.produce_client.get(produce_id).await.unwrap().unwrap();
    assert_eq!(final_stock.quantity_kg, 0.0, "All stock should be consumed");

    let ids: Vec<u32> = system
        .order_client
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|o| o.id.0)
        .collect();
    assert_eq!(ids, (1..=10).collect::<Vec<u32>>());

    system.shutdown().await.unwrap();
}

/// Concurrent registrations with one phone number store exactly one vendor.
#[tokio::test]
async fn test_concurrent_vendor_registrations() {
    let system = MarketSystem::new(4);

    let mut handles = vec![];
    for i in 0..20 {
        let vendor_client = system.vendor_client.clone();
        // Padding differs per request but trims to the same phone
        let phone = if i % 2 == 0 { "555-0123" } else { " 555-0123 " };
        let params = vendor(&format!("Vendor {i}"), phone);
        handles.push(tokio::spawn(async move {
            vendor_client.create_vendor(params).await
        }));
    }

    let mut registered = vec![];
    let mut taken = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(id) => registered.push(id),
            Err(VendorError::PhoneTaken(_)) => taken += 1,
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    assert_eq!(registered, vec![VendorId(1)]);
    assert_eq!(taken, 19);

    let vendors = system.vendor_client.list().await.unwrap();
    assert_eq!(vendors.len(), 1);
    assert_eq!(vendors[0].phone, "555-0123");

    // Rejected registrations consumed no ids
    let next = system
        .vendor_client
        .create_vendor(vendor("Late", "555-0124"))
        .await
        .unwrap();
    assert_eq!(next, VendorId(2));

    system.shutdown().await.unwrap();
}
