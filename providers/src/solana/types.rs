use crate::ProviderError;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Debug)]
pub struct RpcRequest<'a> {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: &'a str,
    pub params: &'a [String],
}

impl<'a> RpcRequest<'a> {
    pub fn new(method: &'a str, params: &'a [String]) -> Self {
        Self {
            jsonrpc: "2.0",
            id: 1,
            method,
            params,
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct RpcErrorObject {
    pub code: i64,
    pub message: String,
}

#[derive(Deserialize, Debug)]
pub struct RpcResponse<T> {
    pub result: Option<T>,
    pub error: Option<RpcErrorObject>,
}

impl<T> RpcResponse<T> {
    pub fn into_result(self) -> Result<T, ProviderError> {
        match (self.result, self.error) {
            (_, Some(e)) => Err(ProviderError::Rpc {
                code: e.code,
                message: e.message,
            }),
            (Some(result), None) => Ok(result),
            (None, None) => Err(ProviderError::MissingResult),
        }
    }
}

/// Result shape of context-carrying methods such as `getBalance`.
#[derive(Deserialize, Debug)]
pub struct WithContext<T> {
    pub value: T,
}

#[cfg(test)]
mod test {
    use super::{RpcRequest, RpcResponse, WithContext};
    use crate::ProviderError;

    #[test]
    fn request_shape() {
        let params = ["11111111111111111111111111111111".to_string()];
        let body = serde_json::to_value(RpcRequest::new("getBalance", &params)).unwrap();

        assert_eq!(
            body,
            serde_json::json!({
                "jsonrpc": "2.0",
                "id": 1,
                "method": "getBalance",
                "params": ["11111111111111111111111111111111"],
            })
        );

        let body = serde_json::to_value(RpcRequest::new("getSlot", &[])).unwrap();
        assert_eq!(body["params"], serde_json::json!([]));
    }

    #[test]
    fn balance_response() {
        let res: RpcResponse<WithContext<u64>> = serde_json::from_str(
            r#"{"jsonrpc":"2.0","result":{"context":{"apiVersion":"1.18.22","slot":318006217},"value":500000000},"id":1}"#,
        )
        .unwrap();

        assert_eq!(res.into_result().unwrap().value, 500_000_000);
    }

    #[test]
    fn error_response() {
        let res: RpcResponse<WithContext<u64>> = serde_json::from_str(
            r#"{"jsonrpc":"2.0","error":{"code":-32602,"message":"Invalid param: WrongSize"},"id":1}"#,
        )
        .unwrap();

        match res.into_result() {
            Err(ProviderError::Rpc { code, message }) => {
                assert_eq!(code, -32602);
                assert_eq!(message, "Invalid param: WrongSize");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn empty_response() {
        let res: RpcResponse<u64> = serde_json::from_str(r#"{"jsonrpc":"2.0","id":1}"#).unwrap();

        assert!(matches!(
            res.into_result(),
            Err(ProviderError::MissingResult)
        ));
    }
}
