/// Generates an async client method that sends one [`MarketRequest`] variant
/// and awaits its reply.
///
/// Every listed parameter becomes a field of the variant, followed by
/// `respond_to`. A closed or dropped actor surfaces as
/// `MarketError::ActorCommunicationError`.
///
/// [`MarketRequest`]: crate::messages::MarketRequest
macro_rules! client_method {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $variant:ident) => {
        impl $client {
            #[tracing::instrument(skip(self))]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<$return_type, $crate::error::MarketError> {
                tracing::debug!("Sending request");
                let (respond_to, response) = tokio::sync::oneshot::channel();
                self.sender
                    .send($crate::messages::MarketRequest::$variant {
                        $($param,)*
                        respond_to,
                    })
                    .await
                    .map_err(|_| $crate::error::MarketError::ActorCommunicationError("Actor closed".to_string()))?;

                response
                    .await
                    .map_err(|_| $crate::error::MarketError::ActorCommunicationError("Actor dropped".to_string()))?
            }
        }
    };
}

/// Declares a cloneable client holding a sender to the market actor.
macro_rules! market_client {
    ($(#[$meta:meta])* $client:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $client {
            sender: tokio::sync::mpsc::Sender<$crate::messages::MarketRequest>,
        }

        impl $client {
            pub fn new(sender: tokio::sync::mpsc::Sender<$crate::messages::MarketRequest>) -> Self {
                Self { sender }
            }
        }
    };
}
