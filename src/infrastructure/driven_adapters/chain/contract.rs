//! Solidity interface of the token contract.
//!
//! Only the functions the gateway calls are declared.

use alloy_sol_types::sol;

sol! {
    #[allow(missing_docs)]
    #[derive(Debug)]
    #[sol(rpc)]
    interface ITransferToken {
        function owner() external view returns (address);
        function balanceOf(address account) external view returns (uint256);
        function secureTransfer(address recipient, uint256 amount) external returns (bool);
    }
}
