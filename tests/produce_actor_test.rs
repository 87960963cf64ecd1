use actor_framework::{mock::MockClient, ActorClient, FrameworkError};
use market_backend::clients::{ProduceClient, VendorClient};
use market_backend::model::{
    Produce, ProduceCreate, ProduceId, ProduceUpdate, Vendor, VendorCreate, VendorId,
};
use market_backend::produce_actor::ProduceError;

fn ada() -> Vendor {
    Vendor::new(
        VendorId(1),
        VendorCreate {
            name: "Ada".into(),
            market_location: "North Market".into(),
            phone: "555-0100".into(),
        },
    )
}

fn tomato() -> ProduceCreate {
    ProduceCreate {
        name: "Tomato".into(),
        quantity_kg: 10.0,
        price_per_kg: 2.5,
        category: "Vegetable".into(),
        is_available: true,
    }
}

/// Real Produce actor with a mocked Vendor dependency.
fn spawn_produce_actor(vendor_mock: &MockClient<Vendor>) -> ProduceClient {
    let (actor, client) = market_backend::produce_actor::new(8);
    tokio::spawn(actor.run(VendorClient::new(vendor_mock.client())));
    client
}

#[tokio::test]
async fn add_produce_checks_vendor_exists() {
    let mut vendor_mock = MockClient::<Vendor>::new();
    vendor_mock.expect_get(VendorId(1)).return_ok(Some(ada()));
    vendor_mock.expect_get(VendorId(2)).return_ok(None);

    let produce = spawn_produce_actor(&vendor_mock);

    let id = produce.add_produce(VendorId(1), tomato()).await.unwrap();
    assert_eq!(id, ProduceId(1));

    let missing = produce.add_produce(VendorId(2), tomato()).await;
    assert_eq!(missing, Err(ProduceError::VendorMissing(VendorId(2))));

    // The rejected item is not stored
    let items = produce.list().await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].vendor_id, VendorId(1));
    vendor_mock.verify();
}

#[tokio::test]
async fn vendor_store_failure_is_a_communication_error() {
    let mut vendor_mock = MockClient::<Vendor>::new();
    vendor_mock
        .expect_get(VendorId(1))
        .return_err(FrameworkError::ActorClosed);

    let produce = spawn_produce_actor(&vendor_mock);

    assert!(matches!(
        produce.add_produce(VendorId(1), tomato()).await,
        Err(ProduceError::ActorCommunicationError(_))
    ));
    vendor_mock.verify();
}

#[tokio::test]
async fn reserve_stock_decrements_or_refuses() {
    let mut vendor_mock = MockClient::<Vendor>::new();
    vendor_mock.expect_get(VendorId(1)).return_ok(Some(ada()));
    let produce = spawn_produce_actor(&vendor_mock);
    let id = produce.add_produce(VendorId(1), tomato()).await.unwrap();

    let after = produce.reserve_stock(id, 4.0).await.unwrap();
    assert_eq!(after.quantity_kg, 6.0);

    let too_much = produce.reserve_stock(id, 7.0).await;
    assert_eq!(
        too_much,
        Err(ProduceError::InsufficientStock {
            requested: 7.0,
            available: 6.0
        })
    );
    assert_eq!(produce.get(id).await.unwrap().unwrap().quantity_kg, 6.0);

    // Exactly the remaining stock is fine
    assert_eq!(produce.reserve_stock(id, 6.0).await.unwrap().quantity_kg, 0.0);

    assert!(matches!(
        produce.reserve_stock(ProduceId(99), 1.0).await,
        Err(ProduceError::NotFound(_))
    ));
    vendor_mock.verify();
}

#[tokio::test]
async fn reservation_with_unrepresentable_total_keeps_stock() {
    let mut vendor_mock = MockClient::<Vendor>::new();
    vendor_mock.expect_get(VendorId(1)).return_ok(Some(ada()));
    let produce = spawn_produce_actor(&vendor_mock);
    let pricey = ProduceCreate {
        quantity_kg: 1e10,
        price_per_kg: 1e300,
        ..tomato()
    };
    let id = produce.add_produce(VendorId(1), pricey).await.unwrap();

    assert_eq!(
        produce.reserve_stock(id, 1e10).await,
        Err(ProduceError::TotalOutOfRange {
            quantity_kg: 1e10,
            price_per_kg: 1e300
        })
    );
    assert_eq!(produce.get(id).await.unwrap().unwrap().quantity_kg, 1e10);

    // A smaller quantity still has a finite total
    let after = produce.reserve_stock(id, 1.0).await.unwrap();
    assert_eq!(after.quantity_kg, 1e10 - 1.0);
    vendor_mock.verify();
}

#[tokio::test]
async fn unavailable_produce_cannot_be_reserved() {
    let mut vendor_mock = MockClient::<Vendor>::new();
    vendor_mock.expect_get(VendorId(1)).return_ok(Some(ada()));
    let produce = spawn_produce_actor(&vendor_mock);
    let id = produce.add_produce(VendorId(1), tomato()).await.unwrap();

    let hidden = produce
        .update_produce(
            id,
            ProduceUpdate {
                is_available: Some(false),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(!hidden.is_available);
    assert_eq!(hidden.quantity_kg, 10.0);

    assert_eq!(
        produce.reserve_stock(id, 1.0).await,
        Err(ProduceError::Unavailable("Tomato".into()))
    );
    vendor_mock.verify();
}

#[tokio::test]
async fn list_grouped_and_delete() {
    let mut vendor_mock = MockClient::<Vendor>::new();
    vendor_mock.expect_get(VendorId(2)).return_ok(Some(ada()));
    vendor_mock.expect_get(VendorId(1)).return_ok(Some(ada()));
    vendor_mock.expect_get(VendorId(2)).return_ok(Some(ada()));
    let produce = spawn_produce_actor(&vendor_mock);

    produce.add_produce(VendorId(2), tomato()).await.unwrap();
    produce.add_produce(VendorId(1), tomato()).await.unwrap();
    produce.add_produce(VendorId(2), tomato()).await.unwrap();

    let grouped = produce.list_grouped().await.unwrap();
    let ids_for = |vendor: u32| -> Vec<ProduceId> {
        grouped[&VendorId(vendor)].iter().map(|p: &Produce| p.id).collect()
    };
    assert_eq!(ids_for(1), vec![ProduceId(2)]);
    assert_eq!(ids_for(2), vec![ProduceId(1), ProduceId(3)]);

    produce.delete(ProduceId(2)).await.unwrap();
    assert!(!produce.list_grouped().await.unwrap().contains_key(&VendorId(1)));
    assert!(matches!(
        produce.delete(ProduceId(2)).await,
        Err(ProduceError::NotFound(_))
    ));
    vendor_mock.verify();
}
