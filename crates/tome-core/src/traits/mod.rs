mod purchase_sink;
mod recommender;

pub use purchase_sink::IPurchaseSink;
pub use recommender::IRecommender;
