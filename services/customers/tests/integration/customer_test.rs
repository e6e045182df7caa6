use custodia_customers::error::CustomersServiceError;
use custodia_customers::usecase::customer::{
    CreateCustomerInput, CreateCustomerUseCase, GetCustomerUseCase,
};

use crate::helpers::MockCustomerRepo;

#[tokio::test]
async fn should_create_and_fetch_customer() {
    for mail in ["alice@gmail.com", "bob@gmail.com"] {
        let repo = MockCustomerRepo::empty();
        let customers_handle = repo.customers_handle();

        let created = CreateCustomerUseCase { repo }
            .execute(CreateCustomerInput { mail: mail.into() })
            .await
            .unwrap();

        assert!(!created.id.is_nil(), "created customer should have an id");
        assert_eq!(created.mail, mail);

        let repo = MockCustomerRepo {
            customers: customers_handle,
        };
        let fetched = GetCustomerUseCase { repo }.execute(created.id).await.unwrap();
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.mail, mail);
    }
}

#[tokio::test]
async fn should_return_not_found_for_unknown_id() {
    let uc = GetCustomerUseCase {
        repo: MockCustomerRepo::empty(),
    };

    let id = uuid::Uuid::now_v7();
    let result = uc.execute(id).await;

    assert!(
        matches!(result, Err(CustomersServiceError::CustomerNotFound(missing)) if missing == id),
        "expected CustomerNotFound, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_blank_mail_without_touching_the_repo() {
    let repo = MockCustomerRepo::empty();
    let customers_handle = repo.customers_handle();

    let result = CreateCustomerUseCase { repo }
        .execute(CreateCustomerInput { mail: "".into() })
        .await;

    let Err(CustomersServiceError::Validation(fields)) = result else {
        panic!("expected Validation, got {result:?}");
    };
    assert_eq!(fields.len(), 1, "exactly one field error expected");
    assert_eq!(fields["mail"], "Email is required");
    assert!(
        customers_handle.lock().unwrap().is_empty(),
        "validation failures must not reach the storage layer"
    );
}

#[tokio::test]
async fn should_reject_malformed_mail_without_touching_the_repo() {
    let repo = MockCustomerRepo::empty();
    let customers_handle = repo.customers_handle();

    let result = CreateCustomerUseCase { repo }
        .execute(CreateCustomerInput {
            mail: "invalid-email".into(),
        })
        .await;

    let Err(CustomersServiceError::Validation(fields)) = result else {
        panic!("expected Validation, got {result:?}");
    };
    assert_eq!(fields.len(), 1, "exactly one field error expected");
    assert_eq!(fields["mail"], "Invalid email format");
    assert!(customers_handle.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_surface_duplicate_mail_as_storage_failure() {
    let repo = MockCustomerRepo::empty();
    let customers_handle = repo.customers_handle();

    let uc = CreateCustomerUseCase { repo };
    uc.execute(CreateCustomerInput {
        mail: "alice@gmail.com".into(),
    })
    .await
    .unwrap();

    let result = uc
        .execute(CreateCustomerInput {
            mail: "alice@gmail.com".into(),
        })
        .await;

    assert!(
        matches!(result, Err(CustomersServiceError::Internal(_))),
        "expected Internal, got {result:?}"
    );
    assert_eq!(
        customers_handle.lock().unwrap().len(),
        1,
        "duplicate create must never silently succeed"
    );
}
