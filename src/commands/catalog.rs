//! Catalog Queries
//!
//! Read-only catalog data for page loaders.

use serde::Deserialize;
use serde_json::json;

use super::StorefrontClient;
use crate::error::StorefrontError;
use crate::models::{Collection, CollectionHero, Connection, Product, Shop};

// ========================
// Documents
// ========================

pub const PRODUCT_CARD_FRAGMENT: &str = r#"
  fragment ProductCard on Product {
    id
    title
    publishedAt
    handle
    vendor
    variants(first: 1) {
      nodes {
        id
        title
        availableForSale
        image {
          url
          altText
          width
          height
        }
        price {
          amount
          currencyCode
        }
        compareAtPrice {
          amount
          currencyCode
        }
        selectedOptions {
          name
          value
        }
      }
    }
  }
"#;

const COLLECTION_CONTENT_FRAGMENT: &str = r#"
  fragment CollectionContent on Collection {
    id
    handle
    title
    descriptionHtml
    heading: metafield(namespace: "hero", key: "title") {
      value
    }
    byline: metafield(namespace: "hero", key: "byline") {
      value
    }
    cta: metafield(namespace: "hero", key: "cta") {
      value
    }
  }
"#;

const HOMEPAGE_SEO_QUERY: &str = r#"
  query seoCollectionContent($handle: String, $country: CountryCode, $language: LanguageCode)
  @inContext(country: $country, language: $language) {
    hero: collection(handle: $handle) {
      ...CollectionContent
    }
    shop {
      name
      description
    }
  }
"#;

const COLLECTION_HERO_QUERY: &str = r#"
  query heroCollectionContent($handle: String, $country: CountryCode, $language: LanguageCode)
  @inContext(country: $country, language: $language) {
    hero: collection(handle: $handle) {
      ...CollectionContent
    }
  }
"#;

const HOMEPAGE_FEATURED_PRODUCTS_QUERY: &str = r#"
  query homepageFeaturedProducts($country: CountryCode, $language: LanguageCode)
  @inContext(country: $country, language: $language) {
    products(first: 8) {
      nodes {
        ...ProductCard
      }
    }
  }
"#;

const FEATURED_COLLECTIONS_QUERY: &str = r#"
  query homepageFeaturedCollections($country: CountryCode, $language: LanguageCode)
  @inContext(country: $country, language: $language) {
    collections(first: 4, sortKey: UPDATED_AT) {
      nodes {
        id
        title
        handle
        image {
          altText
          width
          height
          url
        }
      }
    }
  }
"#;

const FEATURED_ITEMS_QUERY: &str = r#"
  query FeaturedItems($country: CountryCode, $language: LanguageCode, $pageBy: Int = 12)
  @inContext(country: $country, language: $language) {
    products(first: $pageBy) {
      nodes {
        ...ProductCard
        collections(first: 5) {
          nodes {
            handle
          }
        }
        tags
      }
    }
  }
"#;

fn with_fragment(document: &str, fragment: &str) -> String {
    format!("{}\n{}", document, fragment)
}

// ========================
// Response Shapes
// ========================

/// Above-the-fold homepage data
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HomepageSeo {
    pub shop: Shop,
    #[serde(default)]
    pub hero: Option<CollectionHero>,
}

#[derive(Deserialize)]
struct HeroData {
    hero: Option<CollectionHero>,
}

#[derive(Deserialize)]
struct ProductsData {
    products: Connection<Product>,
}

#[derive(Deserialize)]
struct CollectionsData {
    collections: Connection<Collection>,
}

// ========================
// Queries
// ========================

pub async fn homepage_seo(client: &StorefrontClient, handle: &str) -> Result<HomepageSeo, StorefrontError> {
    let document = with_fragment(HOMEPAGE_SEO_QUERY, COLLECTION_CONTENT_FRAGMENT);
    client.query(&document, json!({ "handle": handle })).await
}

pub async fn collection_hero(client: &StorefrontClient, handle: &str) -> Result<Option<CollectionHero>, StorefrontError> {
    let document = with_fragment(COLLECTION_HERO_QUERY, COLLECTION_CONTENT_FRAGMENT);
    let data: HeroData = client.query(&document, json!({ "handle": handle })).await?;
    Ok(data.hero)
}

pub async fn featured_products(client: &StorefrontClient) -> Result<Vec<Product>, StorefrontError> {
    let document = with_fragment(HOMEPAGE_FEATURED_PRODUCTS_QUERY, PRODUCT_CARD_FRAGMENT);
    let data: ProductsData = client.query(&document, json!({})).await?;
    Ok(data.products.into_nodes())
}

pub async fn featured_collections(client: &StorefrontClient) -> Result<Vec<Collection>, StorefrontError> {
    let data: CollectionsData = client.query(FEATURED_COLLECTIONS_QUERY, json!({})).await?;
    Ok(data.collections.into_nodes())
}

pub async fn featured_items(client: &StorefrontClient, page_by: u32) -> Result<Vec<Product>, StorefrontError> {
    let document = with_fragment(FEATURED_ITEMS_QUERY, PRODUCT_CARD_FRAGMENT);
    let data: ProductsData = client.query(&document, json!({ "pageBy": page_by })).await?;
    Ok(data.products.into_nodes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::decode_response;

    #[test]
    fn test_documents_carry_their_fragments() {
        let doc = with_fragment(FEATURED_ITEMS_QUERY, PRODUCT_CARD_FRAGMENT);
        assert!(doc.contains("...ProductCard"));
        assert!(doc.contains("fragment ProductCard on Product"));
    }

    #[test]
    fn test_decode_homepage_seo_without_hero() {
        let seo: HomepageSeo = decode_response(
            r#"{"data":{"hero":null,"shop":{"name":"UNCMFRT","description":"Clean supplements"}}}"#,
        )
        .unwrap();
        assert_eq!(seo.shop.name, "UNCMFRT");
        assert!(seo.hero.is_none());
    }

    #[test]
    fn test_decode_hero_metafields() {
        let data: HeroData = decode_response(
            r#"{"data":{"hero":{
                "id":"c1","handle":"freestyle","title":"Freestyle",
                "heading":{"value":"Great things never came from comfort zones."},
                "byline":null,"cta":{"value":"Shop Now"}
            }}}"#,
        )
        .unwrap();
        let hero = data.hero.unwrap();
        assert_eq!(hero.heading_text(), "Great things never came from comfort zones.");
        assert_eq!(hero.cta.map(|m| m.value), Some("Shop Now".to_string()));
    }

    #[test]
    fn test_decode_featured_items() {
        let data: ProductsData = decode_response(
            r#"{"data":{"products":{"nodes":[{
                "id":"p1","title":"Omega-3","handle":"omega-3",
                "variants":{"nodes":[{"id":"v1","price":{"amount":"49.95","currencyCode":"USD"}}]},
                "collections":{"nodes":[{"handle":"foundational-health"}]},
                "tags":["Vegan"]
            }]}}}"#,
        )
        .unwrap();
        let products = data.products.into_nodes();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].tags, vec!["Vegan".to_string()]);
        assert_eq!(products[0].collections.nodes()[0].handle, "foundational-health");
    }
}
