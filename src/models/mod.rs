pub mod player;
pub mod rpc;

pub use player::{ActivePlayer, NowPlaying, PlayPauseAction, PlaybackProperties, PlayerItem};
pub use rpc::{Params, RpcRequest, RpcResponse};
