// common/src/contract.rs
//
// Solidity interface of the ELX realties contract. Only the members the
// client calls are declared; the deployed contract carries the full ERC-721
// surface.

use alloy::sol;

sol! {
    #[sol(rpc)]
    contract ElxRealties {
        #[derive(Debug, PartialEq, Eq)]
        struct Realty {
            uint256 tokenId;
            address owner;
            string location;
            string description;
            uint256 price;
            string image;
            string tokenCid;
        }

        event Transfer(address indexed from, address indexed to, uint256 indexed tokenId);

        function name() external view returns (string memory);
        function symbol() external view returns (string memory);

        function createListing(
            string memory location,
            string memory description,
            uint256 price,
            string memory image,
            string memory tokenCid
        ) external returns (uint256);

        function getMyRealties() external view returns (Realty[] memory);
        function getTokenUri(uint256 tokenId) external view returns (string memory);
    }
}
