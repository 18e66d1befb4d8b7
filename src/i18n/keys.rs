// SPDX-License-Identifier: MPL-2.0
//! Translation keys used by the client screens.

/// Every key the screens request. All locales are expected to define each one.
pub const ALL: &[&str] = &[
    "auth.welcome",
    "auth.subtitle",
    "auth.login",
    "auth.signup",
    "auth.email",
    "auth.password",
    "auth.confirmPassword",
    "auth.name",
    "auth.phone",
    "auth.farmer",
    "auth.admin",
    "auth.role",
    "auth.noAccount",
    "auth.hasAccount",
    "auth.loginBtn",
    "auth.signupBtn",

    "dashboard.title",
    "dashboard.welcome",
    "dashboard.subtitle",
    "dashboard.cropAdvisory",
    "dashboard.cropAdvisoryDesc",
    "dashboard.diseaseDetection",
    "dashboard.diseaseDetectionDesc",
    "dashboard.smartRecommendations",
    "dashboard.smartRecommendationsDesc",
    "dashboard.nearbyMarkets",
    "dashboard.nearbyMarketsDesc",
    "dashboard.farmerChat",
    "dashboard.farmerChatDesc",
    "dashboard.history",
    "dashboard.historyDesc",

    "crops.title",
    "crops.subtitle",
    "crops.search",
    "crops.all",
    "crops.kharif",
    "crops.rabi",
    "crops.summer",
    "crops.sowingPeriod",
    "crops.harvestPeriod",
    "crops.soilType",
    "crops.waterNeeds",
    "crops.yield",
    "crops.empty",
    "crops.count",

    "disease.title",
    "disease.subtitle",
    "disease.upload",
    "disease.capture",
    "disease.analyzing",
    "disease.results",
    "disease.name",
    "disease.symptoms",
    "disease.causes",
    "disease.treatment",
    "disease.prevention",
    "disease.saveReport",

    "recommendations.title",
    "recommendations.subtitle",
    "recommendations.fertilizer",
    "recommendations.pesticide",
    "recommendations.insecticide",
    "recommendations.dosage",
    "recommendations.mixing",
    "recommendations.ecoFriendly",

    "markets.title",
    "markets.subtitle",
    "markets.distance",
    "markets.route",
    "markets.produce",
    "markets.timing",

    "common.back",
    "common.save",
    "common.cancel",
    "common.loading",
    "common.error",
    "common.success",
    "common.logout",
    "common.settings",
    "common.language",
];

/// Dashboard tiles as (title key, description key), in display order.
pub const DASHBOARD_FEATURES: &[(&str, &str)] = &[
    ("dashboard.cropAdvisory", "dashboard.cropAdvisoryDesc"),
    ("dashboard.diseaseDetection", "dashboard.diseaseDetectionDesc"),
    ("dashboard.smartRecommendations", "dashboard.smartRecommendationsDesc"),
    ("dashboard.nearbyMarkets", "dashboard.nearbyMarketsDesc"),
    ("dashboard.farmerChat", "dashboard.farmerChatDesc"),
    ("dashboard.history", "dashboard.historyDesc"),
];

pub const COMMON_LANGUAGE: &str = "common.language";
pub const CROPS_TITLE: &str = "crops.title";
pub const CROPS_SUBTITLE: &str = "crops.subtitle";
pub const CROPS_KHARIF: &str = "crops.kharif";
pub const CROPS_RABI: &str = "crops.rabi";
pub const CROPS_SUMMER: &str = "crops.summer";
pub const CROPS_ALL: &str = "crops.all";
pub const CROPS_EMPTY: &str = "crops.empty";
pub const CROPS_COUNT: &str = "crops.count";
pub const CROPS_SOWING_PERIOD: &str = "crops.sowingPeriod";
pub const CROPS_HARVEST_PERIOD: &str = "crops.harvestPeriod";
pub const CROPS_SOIL_TYPE: &str = "crops.soilType";
pub const CROPS_WATER_NEEDS: &str = "crops.waterNeeds";
pub const CROPS_YIELD: &str = "crops.yield";
pub const DASHBOARD_TITLE: &str = "dashboard.title";
pub const DASHBOARD_SUBTITLE: &str = "dashboard.subtitle";

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn keys_are_unique_and_namespaced() {
        let unique: HashSet<_> = ALL.iter().collect();
        assert_eq!(unique.len(), ALL.len());
        assert!(ALL.iter().all(|key| key.split_once('.').is_some()));
    }

    #[test]
    fn dashboard_features_are_known_keys() {
        for (title, description) in DASHBOARD_FEATURES {
            assert!(ALL.contains(title));
            assert!(ALL.contains(description));
        }
    }
}
