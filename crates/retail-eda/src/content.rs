//! Literal text of the retail sales EDA notebook, one constant per cell.
//!
//! The analysis code is payload only: it is never parsed or run here.

pub const TITLE: &str = "# Retail Sales Exploratory Data Analysis

This notebook analyzes online retail sales data to uncover insights about customer behavior, product performance, and sales patterns.";

pub const SETUP_HEADER: &str = "## 1. Setup and Imports";

pub const SETUP: &str = r#"# ========================
# 1. Setup
# ========================
import pandas as pd
import numpy as np
import matplotlib.pyplot as plt
import seaborn as sns

# Set styles
sns.set(style="whitegrid", palette="muted")
plt.rcParams["figure.figsize"] = (12,6)"#;

pub const LOAD_HEADER: &str = "## 2. Load Data";

pub const LOAD: &str = r#"# ========================
# 2. Load Data
# ========================
# Download dataset from UCI/Kaggle and adjust path accordingly
df = pd.read_excel("Online Retail.xlsx")

# Quick look
print(df.shape)
df.head()"#;

pub const CLEANING_HEADER: &str = "## 3. Data Cleaning";

pub const CLEANING: &str = r#"# ========================
# 3. Data Cleaning
# ========================
# Drop rows with missing CustomerID
df = df.dropna(subset=["CustomerID"])

# Remove cancellations (InvoiceNo starting with 'C')
df = df[~df["InvoiceNo"].astype(str).str.startswith("C")]

# Create TotalPrice column
df["TotalPrice"] = df["Quantity"] * df["UnitPrice"]

# Parse dates
df["InvoiceDate"] = pd.to_datetime(df["InvoiceDate"])
df["Year"] = df["InvoiceDate"].dt.year
df["Month"] = df["InvoiceDate"].dt.month
df["DayOfWeek"] = df["InvoiceDate"].dt.day_name()
df["Hour"] = df["InvoiceDate"].dt.hour"#;

pub const ANALYSIS_HEADER: &str = "## 4. Exploratory Analysis";

pub const BASIC_STATS: &str = r#"# ========================
# 4. Exploratory Analysis
# ========================

# --- Basic stats ---
print("Unique customers:", df["CustomerID"].nunique())
print("Unique products:", df["StockCode"].nunique())
print("Unique countries:", df["Country"].nunique())"#;

pub const MONTHLY_REVENUE: &str = r#"# --- Revenue by Month ---
monthly_sales = df.groupby(["Year","Month"])["TotalPrice"].sum().reset_index()
sns.lineplot(data=monthly_sales, x="Month", y="TotalPrice", hue="Year", marker="o")
plt.title("Monthly Revenue Trend")
plt.show()"#;

pub const WEEKDAY_REVENUE: &str = r#"# --- Revenue by Day of Week ---
dow_sales = df.groupby("DayOfWeek")["TotalPrice"].sum().reindex(
    ["Monday","Tuesday","Wednesday","Thursday","Friday","Saturday","Sunday"]
)
sns.barplot(x=dow_sales.index, y=dow_sales.values)
plt.title("Revenue by Day of Week")
plt.xticks(rotation=45)
plt.show()"#;

pub const TOP_PRODUCTS: &str = r#"# --- Top 10 Products ---
top_products = df.groupby("Description")["TotalPrice"].sum().sort_values(ascending=False).head(10)
sns.barplot(y=top_products.index, x=top_products.values)
plt.title("Top 10 Products by Revenue")
plt.xlabel("Revenue")
plt.ylabel("Product")
plt.show()"#;

pub const COUNTRY_SALES: &str = r#"# --- Sales by Country (excluding UK) ---
country_sales = df.groupby("Country")["TotalPrice"].sum().sort_values(ascending=False).drop("United Kingdom").head(10)
sns.barplot(y=country_sales.index, x=country_sales.values)
plt.title("Top Countries by Revenue (Excluding UK)")
plt.xlabel("Revenue")
plt.ylabel("Country")
plt.show()"#;

pub const INSIGHTS_HEADER: &str = "## 5. Insights and Conclusions";

pub const INSIGHTS: &str = r#"# ========================
# 5. Insights (to write in README)
# ========================
# Example insights you might find:
# - UK dominates revenue, but Netherlands/Germany are key international markets
# - Revenue spikes during Q4 â†’ holiday effect
# - Small % of products generate majority of revenue (Pareto effect)

print("Analysis complete! Check the visualizations above for insights.")"#;
