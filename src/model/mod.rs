/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
/// Endpoint table and header profile
pub mod endpoints;
/// Request forms sent to the site
pub mod requests;
/// Parsers for the site's responses
pub mod responses;
