//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `StoreError` from `shopdb_core::storage`.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::delete_item::DeleteItemError;
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::query::QueryError;
use aws_sdk_dynamodb::operation::scan::ScanError;
use aws_sdk_dynamodb::operation::update_item::UpdateItemError;
use shopdb_core::storage::StoreError;

/// Transport failures never reached DynamoDB and are reported as connection faults.
fn transport_error<E, R>(err: &SdkError<E, R>) -> Option<StoreError> {
    match err {
        SdkError::DispatchFailure(_) => Some(StoreError::ConnectionFailed(
            "Could not reach DynamoDB".to_string(),
        )),
        SdkError::TimeoutError(_) => Some(StoreError::ConnectionFailed(
            "DynamoDB request timed out".to_string(),
        )),
        _ => None,
    }
}

fn throttled() -> StoreError {
    StoreError::Throttled("Throughput exceeded, please retry".to_string())
}

fn table_not_found() -> StoreError {
    StoreError::QueryFailed("Table not found".to_string())
}

fn internal_error() -> StoreError {
    StoreError::QueryFailed("DynamoDB internal server error".to_string())
}

/// Map a GetItem SDK error to StoreError.
pub fn map_get_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<GetItemError, R>,
) -> StoreError {
    if let Some(error) = transport_error(&err) {
        return error;
    }
    match err.into_service_error() {
        GetItemError::ResourceNotFoundException(_) => table_not_found(),
        GetItemError::ProvisionedThroughputExceededException(_)
        | GetItemError::RequestLimitExceeded(_) => throttled(),
        GetItemError::InternalServerError(_) => internal_error(),
        err => StoreError::QueryFailed(format!("GetItem failed: {:?}", err)),
    }
}

/// Map a PutItem SDK error to StoreError.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
) -> StoreError {
    if let Some(error) = transport_error(&err) {
        return error;
    }
    match err.into_service_error() {
        PutItemError::ResourceNotFoundException(_) => table_not_found(),
        PutItemError::ProvisionedThroughputExceededException(_)
        | PutItemError::RequestLimitExceeded(_) => throttled(),
        PutItemError::ItemCollectionSizeLimitExceededException(_) => {
            StoreError::QueryFailed("Item collection size limit exceeded".to_string())
        }
        PutItemError::TransactionConflictException(_) => {
            StoreError::QueryFailed("Transaction conflict, please retry".to_string())
        }
        PutItemError::InternalServerError(_) => internal_error(),
        err => StoreError::QueryFailed(format!("PutItem failed: {:?}", err)),
    }
}

/// Map an UpdateItem SDK error to StoreError.
pub fn map_update_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<UpdateItemError, R>,
) -> StoreError {
    if let Some(error) = transport_error(&err) {
        return error;
    }
    match err.into_service_error() {
        UpdateItemError::ResourceNotFoundException(_) => table_not_found(),
        UpdateItemError::ProvisionedThroughputExceededException(_)
        | UpdateItemError::RequestLimitExceeded(_) => throttled(),
        UpdateItemError::ItemCollectionSizeLimitExceededException(_) => {
            StoreError::QueryFailed("Item collection size limit exceeded".to_string())
        }
        UpdateItemError::TransactionConflictException(_) => {
            StoreError::QueryFailed("Transaction conflict, please retry".to_string())
        }
        UpdateItemError::InternalServerError(_) => internal_error(),
        err => StoreError::QueryFailed(format!("UpdateItem failed: {:?}", err)),
    }
}

/// Map a DeleteItem SDK error to StoreError.
pub fn map_delete_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<DeleteItemError, R>,
) -> StoreError {
    if let Some(error) = transport_error(&err) {
        return error;
    }
    match err.into_service_error() {
        DeleteItemError::ResourceNotFoundException(_) => table_not_found(),
        DeleteItemError::ProvisionedThroughputExceededException(_)
        | DeleteItemError::RequestLimitExceeded(_) => throttled(),
        DeleteItemError::TransactionConflictException(_) => {
            StoreError::QueryFailed("Transaction conflict, please retry".to_string())
        }
        DeleteItemError::InternalServerError(_) => internal_error(),
        err => StoreError::QueryFailed(format!("DeleteItem failed: {:?}", err)),
    }
}

/// Map a Query SDK error to StoreError.
pub fn map_query_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<QueryError, R>,
) -> StoreError {
    if let Some(error) = transport_error(&err) {
        return error;
    }
    match err.into_service_error() {
        QueryError::ResourceNotFoundException(_) => table_not_found(),
        QueryError::ProvisionedThroughputExceededException(_)
        | QueryError::RequestLimitExceeded(_) => throttled(),
        QueryError::InternalServerError(_) => internal_error(),
        err => StoreError::QueryFailed(format!("Query failed: {:?}", err)),
    }
}

/// Map a Scan SDK error to StoreError.
pub fn map_scan_error<R: Debug + Send + Sync + 'static>(err: SdkError<ScanError, R>) -> StoreError {
    if let Some(error) = transport_error(&err) {
        return error;
    }
    match err.into_service_error() {
        ScanError::ResourceNotFoundException(_) => table_not_found(),
        ScanError::ProvisionedThroughputExceededException(_)
        | ScanError::RequestLimitExceeded(_) => throttled(),
        ScanError::InternalServerError(_) => internal_error(),
        err => StoreError::QueryFailed(format!("Scan failed: {:?}", err)),
    }
}
