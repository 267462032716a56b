use alloy::sol;

sol! {
contract SimpleAuction {
    constructor(string memory itemName, uint256 minimumBid, uint256 durationMinutes);
}
}
